//! APIs and models related to organisation accounts.

mod api;
mod builder;
mod model;

pub use api::AccountsApi;
pub use builder::*;
pub use model::*;
