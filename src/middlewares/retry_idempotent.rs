use async_trait::async_trait;
use reqwest::{Method, Request, Response};
use reqwest_middleware::{Middleware, Next};
use reqwest_retry::RetryTransientMiddleware;
use retry_policies::{RetryDecision, RetryPolicy};
use std::{
    fmt::{Debug, Formatter},
    sync::Arc,
};
use task_local_extensions::Extensions;

/// Middleware that retries transient failures, but only for idempotent requests.
///
/// The accounts API has no idempotency keys, so account creation (`POST`) is never
/// retried: a replayed creation would either duplicate the account or fail with a conflict.
/// Lookups, deletions (which carry the record `version`) and health checks are safe to repeat.
pub struct RetryIdempotentMiddleware {
    inner: RetryTransientMiddleware<DynRetryPolicy>,
}

impl RetryIdempotentMiddleware {
    pub fn new(retry_policy: DynRetryPolicy) -> Self {
        Self {
            inner: RetryTransientMiddleware::new_with_policy(retry_policy),
        }
    }
}

pub(crate) fn is_idempotent(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::OPTIONS | Method::PUT | Method::DELETE
    )
}

#[async_trait]
impl Middleware for RetryIdempotentMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        if is_idempotent(req.method()) {
            self.inner.handle(req, extensions, next).await
        } else {
            tracing::trace!(method = %req.method(), "Skipping retries for non idempotent request");
            next.run(req, extensions).await
        }
    }
}

/// Wrapper type around a retry policy because `dyn RetryPolicy` does not implement `RetryPolicy`.
#[derive(Clone)]
pub struct DynRetryPolicy(pub Arc<dyn RetryPolicy + Send + Sync + 'static>);

impl RetryPolicy for DynRetryPolicy {
    fn should_retry(&self, n_past_retries: u32) -> RetryDecision {
        self.0.should_retry(n_past_retries)
    }
}

impl Debug for DynRetryPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynRetryPolicy").finish_non_exhaustive()
    }
}
