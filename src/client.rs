//! Module containing the main accounts API client.

use crate::{
    apis::{accounts::AccountsApi, health::HealthApi, AccountsClientInner},
    common::DEFAULT_API_VERSION,
    middlewares::{
        error_handling::ErrorHandlingMiddleware,
        inject_user_agent::InjectUserAgentMiddleware,
        retry_idempotent::{DynRetryPolicy, RetryIdempotentMiddleware},
    },
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::TracingMiddleware;
use retry_policies::RetryPolicy;
use std::sync::Arc;
use uuid::Uuid;

/// Client for the organisation accounts API.
///
/// Requests are not retried unless a retry policy is set with
/// [`with_retry_policy`](AccountsClientBuilder::with_retry_policy),
/// and even then account creation is never retried.
#[derive(Debug, Clone)]
pub struct AccountsClient {
    /// Organisation accounts APIs client.
    pub accounts: AccountsApi,
    /// Health check APIs client.
    pub health: HealthApi,
}

impl AccountsClient {
    /// Builds a new [`AccountsClient`](crate::client::AccountsClient) with the default configuration.
    pub fn new(base_url: Url) -> AccountsClient {
        AccountsClientBuilder::new(base_url).build()
    }

    /// Returns a new builder to configure a new [`AccountsClient`](crate::client::AccountsClient).
    pub fn builder(base_url: Url) -> AccountsClientBuilder {
        AccountsClientBuilder::new(base_url)
    }
}

/// Builder for an [`AccountsClient`](crate::client::AccountsClient).
#[derive(Debug)]
pub struct AccountsClientBuilder {
    client: reqwest::Client,
    retry_policy: Option<DynRetryPolicy>,
    base_url: Url,
    api_version: String,
    organisation_id: Option<Uuid>,
}

impl AccountsClientBuilder {
    /// Creates a new builder to configure an [`AccountsClient`](crate::client::AccountsClient)
    /// talking to the service at `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            retry_policy: None,
            base_url,
            api_version: DEFAULT_API_VERSION.to_string(),
            organisation_id: None,
        }
    }

    /// Consumes the builder and builds a new [`AccountsClient`](crate::client::AccountsClient).
    pub fn build(self) -> AccountsClient {
        let api_url = versioned_url(self.base_url, &self.api_version);
        tracing::debug!(api_url = %api_url, "Building accounts client");

        let inner = Arc::new(AccountsClientInner {
            client: build_client_with_middleware(self.client, self.retry_policy),
            api_url,
            organisation_id: self.organisation_id,
        });

        AccountsClient {
            accounts: AccountsApi::new(inner.clone()),
            health: HealthApi::new(inner),
        }
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    ///
    /// Use this to configure timeouts, proxies or TLS settings.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets a [`RetryPolicy`](retry_policies::RetryPolicy) to use when retrying transient failures
    /// of idempotent requests (fetch, delete and health check).
    ///
    /// Defaults to `None`, which disables retries.
    pub fn with_retry_policy(
        mut self,
        retry_policy: impl Into<Option<Arc<dyn RetryPolicy + Send + Sync + 'static>>>,
    ) -> Self {
        self.retry_policy = retry_policy.into().map(DynRetryPolicy);
        self
    }

    /// Sets the API version appended to the base URL.
    ///
    /// Defaults to: `v1`
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Sets the organisation owning every created account.
    ///
    /// By default a new random organisation id is generated for each account.
    pub fn with_organisation_id(mut self, organisation_id: Uuid) -> Self {
        self.organisation_id = Some(organisation_id);
        self
    }
}

fn versioned_url(mut base_url: Url, api_version: &str) -> Url {
    if let Ok(mut path) = base_url.path_segments_mut() {
        path.pop_if_empty().push(api_version);
    }
    base_url
}

fn build_client_with_middleware(
    client: reqwest::Client,
    retry_policy: Option<DynRetryPolicy>,
) -> ClientWithMiddleware {
    let mut builder = reqwest_middleware::ClientBuilder::new(client)
        .with(InjectUserAgentMiddleware::new())
        .with(TracingMiddleware::default())
        .with(ErrorHandlingMiddleware);

    if let Some(retry_policy) = retry_policy {
        builder = builder.with(RetryIdempotentMiddleware::new(retry_policy));
    }

    builder.build()
}
