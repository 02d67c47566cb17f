use crate::{
    apis::{
        accounts::{
            Account, AccountAttributes, AccountData, AccountResponse, CreateAccountRequest,
            OrganisationAccount, ResourceType,
        },
        AccountsClientInner,
    },
    common::{ResponseClass, ACCOUNTS_PATH},
    Error,
};
use reqwest::{header::CONTENT_TYPE, StatusCode, Url};
use std::sync::Arc;
use uuid::Uuid;

/// Organisation accounts APIs client.
#[derive(Clone, Debug)]
pub struct AccountsApi {
    inner: Arc<AccountsClientInner>,
}

impl AccountsApi {
    pub(crate) fn new(inner: Arc<AccountsClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new bank account for the organisation.
    ///
    /// The account must have been [built](OrganisationAccount::build), otherwise
    /// [`Error::EmptyAccount`] is returned without contacting the server.
    /// Validation failures reported by the server are returned as [`Error::ApiError`],
    /// any other failure as a generic error suggesting to try again.
    #[tracing::instrument(
        name = "Create Account",
        skip(self, account),
        fields(country = ?account.country())
    )]
    pub async fn create(&self, account: &OrganisationAccount) -> Result<Account, Error> {
        if !account.is_ready() {
            return Err(Error::EmptyAccount);
        }

        let request = CreateAccountRequest {
            data: self.account_data(account),
        };
        let body = serde_json::to_vec(&request)?;

        let res = self
            .inner
            .client
            .post(self.inner.endpoint(ACCOUNTS_PATH.iter().copied()))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(Error::from);

        match res {
            Ok(response) => {
                let created: AccountResponse = response.json().await?;
                tracing::debug!(
                    id = %created.data.id,
                    link = ?created.links.self_link,
                    "Account created"
                );
                Ok(Account {
                    id: created.data.id,
                })
            }
            Err(Error::ApiError(api_error)) => match ResponseClass::of(api_error.status) {
                ResponseClass::ClientError => Err(Error::ApiError(api_error)),
                ResponseClass::Success | ResponseClass::Other => Err(Error::Unexpected {
                    status: api_error.status,
                }),
            },
            Err(e) => Err(e),
        }
    }

    /// Gets the details of an existing account.
    ///
    /// `id` must be a non-nil UUID, otherwise [`Error::InvalidAccountId`] is returned
    /// without contacting the server.
    #[tracing::instrument(name = "Fetch Account by ID", skip(self))]
    pub async fn fetch(&self, id: &str) -> Result<AccountData, Error> {
        let id = parse_account_id(id)?;

        let res: AccountResponse = self
            .inner
            .client
            .get(self.account_url(id))
            .send()
            .await?
            .json()
            .await?;

        Ok(res.data)
    }

    /// Deletes the given `version` of an account.
    ///
    /// Returns [`Error::NotFound`] if the server has no such account.
    #[tracing::instrument(name = "Delete Account", skip(self))]
    pub async fn delete(&self, id: &str, version: i64) -> Result<(), Error> {
        let id = parse_account_id(id)?;

        let res = self
            .inner
            .client
            .delete(self.account_url(id))
            .query(&[("version", version)])
            .send()
            .await
            .map_err(Error::from);

        match res {
            Ok(response) => {
                let status = response.status();
                response.bytes().await?;

                match ResponseClass::from(status) {
                    ResponseClass::Success if status == StatusCode::NO_CONTENT => Ok(()),
                    _ => Err(Error::Unexpected {
                        status: status.as_u16(),
                    }),
                }
            }
            Err(Error::ApiError(api_error)) => match ResponseClass::of(api_error.status) {
                ResponseClass::ClientError if api_error.status == 404 => Err(Error::NotFound),
                _ => Err(Error::Unexpected {
                    status: api_error.status,
                }),
            },
            Err(e) => Err(e),
        }
    }

    fn account_url(&self, id: Uuid) -> Url {
        let id = id.to_string();
        self.inner
            .endpoint(ACCOUNTS_PATH.iter().copied().chain([id.as_str()]))
    }

    fn account_data(&self, account: &OrganisationAccount) -> AccountData {
        AccountData {
            r#type: ResourceType::Accounts,
            id: Uuid::new_v4(),
            organisation_id: self.inner.organisation_id.unwrap_or_else(Uuid::new_v4),
            version: 0,
            created_on: None,
            modified_on: None,
            attributes: AccountAttributes::from(account),
        }
    }
}

/// Parses an account id, rejecting the nil UUID.
fn parse_account_id(id: &str) -> Result<Uuid, Error> {
    match Uuid::parse_str(id) {
        Ok(uuid) if !uuid.is_nil() => Ok(uuid),
        _ => Err(Error::InvalidAccountId(id.to_string())),
    }
}
