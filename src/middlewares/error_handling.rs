use crate::error::{ApiError, Error};
use async_trait::async_trait;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use serde::Deserialize;
use task_local_extensions::Extensions;

/// Reqwest middleware which translates error responses returned from the accounts API
/// into [`Error::ApiError`](crate::error::Error)s.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let response = next.run(req, extensions).await?;

        if response.status().is_success() {
            return Ok(response);
        }

        // The whole body is read before the error is built.
        // Try parsing it as an `ErrorResponse`, and if that doesn't work,
        // use the raw contents (or the status reason when empty) as the error message.
        let status = response.status();
        let bytes = response.bytes().await?;

        tracing::debug!("Failed HTTP request. Status code: {}", status);

        let error_message = match serde_json::from_slice::<ErrorResponse>(&bytes) {
            Ok(error_response) => error_response.error_message,
            Err(_) if bytes.is_empty() => status
                .canonical_reason()
                .unwrap_or("Unknown Error")
                .to_string(),
            Err(_) => String::from_utf8_lossy(&bytes).into_owned(),
        };

        Err(Error::ApiError(ApiError {
            status: status.as_u16(),
            error_message,
        })
        .into())
    }
}

/// Error envelope returned by the accounts API.
#[derive(Deserialize, Debug)]
struct ErrorResponse {
    error_message: String,
}
