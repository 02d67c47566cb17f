//! Rust client for the organisation accounts REST API.
//!
//! The client covers the account lifecycle exposed by the API: creating a new
//! bank account for an organisation, fetching it back, deleting it, and checking
//! whether the service is healthy.
//!
//! # Usage
//!
//! ## Initialize a new `AccountsClient`
//!
//! Create a new [`AccountsClient`](crate::client::AccountsClient) pointing to the base URL of the service.
//! The API version (`v1` by default) is appended automatically.
//!
//! ```rust,no_run
//! # use accounts_client::AccountsClient;
//! # use reqwest::Url;
//! let client = AccountsClient::builder(Url::parse("http://localhost:8080").unwrap())
//!     .build();
//! ```
//!
//! ## Create an account
//!
//! Accounts are assembled with [`OrganisationAccount`](crate::apis::accounts::OrganisationAccount),
//! whose chain is closed by a call to `build`.
//!
//! ```rust,no_run
//! # use accounts_client::{AccountsClient, Error, apis::accounts::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let client: AccountsClient = unreachable!();
//! #
//! let account = OrganisationAccount::default()
//!     .with_bank("400300", "GBDSC")
//!     .with_bic("NWBKGB22")
//!     .with_currency("GBP")
//!     .with_alternative_name("Sam")
//!     .build("GB", "Samantha Holder");
//!
//! let created = client.accounts.create(&account).await?;
//! println!("Created new account: {}", created.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Fetch and delete an account
//!
//! ```rust,no_run
//! # use accounts_client::{AccountsClient, Error};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let client: AccountsClient = unreachable!();
//! #
//! let account = client
//!     .accounts
//!     .fetch("49dac5ee-6ffb-4bb3-a24d-9c36d4f4ca36")
//!     .await?;
//!
//! client
//!     .accounts
//!     .delete(&account.id.to_string(), account.version)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every operation returns an [`Error`](crate::error::Error). Remote validation errors
//! may carry several lines; use [`Error::messages`](crate::error::Error::messages)
//! to get them as a list.

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod client;
mod common;
pub mod error;
mod middlewares;

pub use client::AccountsClient;
pub use common::ResponseClass;
pub use error::Error;
