use crate::{
    apis::AccountsClientInner,
    common::{ResponseClass, HEALTH_PATH},
    Error,
};
use reqwest::StatusCode;
use std::sync::Arc;

/// Accounts service health check client.
#[derive(Clone, Debug)]
pub struct HealthApi {
    inner: Arc<AccountsClientInner>,
}

impl HealthApi {
    pub(crate) fn new(inner: Arc<AccountsClientInner>) -> Self {
        Self { inner }
    }

    /// Returns `true` if the service answered the health check with `200 OK`.
    ///
    /// Failures are logged and reported as `false`.
    #[tracing::instrument(name = "Get API Status", skip(self))]
    pub async fn status(&self) -> bool {
        let res = self
            .inner
            .client
            .get(self.inner.endpoint(HEALTH_PATH.iter().copied()))
            .send()
            .await
            .map_err(Error::from);

        match res {
            Ok(response) => {
                let status = response.status();
                if let Err(e) = response.bytes().await {
                    tracing::warn!(error = %e, "Failed to read health check response");
                    return false;
                }

                match ResponseClass::from(status) {
                    ResponseClass::Success if status == StatusCode::OK => true,
                    _ => {
                        tracing::warn!(status = %status, "Unexpected health check response");
                        false
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Health check failed");
                false
            }
        }
    }
}
