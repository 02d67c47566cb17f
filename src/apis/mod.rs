//! Clients for the various accounts service APIs.

use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use std::fmt::{Debug, Formatter};
use uuid::Uuid;

pub mod accounts;
pub mod health;

pub(crate) struct AccountsClientInner {
    pub(crate) client: ClientWithMiddleware,
    /// Base URL with the API version already appended, e.g. `http://localhost:8080/v1`.
    pub(crate) api_url: Url,
    /// Organisation owning the created accounts. A new one is generated per account when `None`.
    pub(crate) organisation_id: Option<Uuid>,
}

impl AccountsClientInner {
    /// Builds the URL of an endpoint from its path segments.
    pub(crate) fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl Debug for AccountsClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountsClientInner")
            .field("api_url", &self.api_url.as_str())
            .field("organisation_id", &self.organisation_id)
            .finish_non_exhaustive()
    }
}
