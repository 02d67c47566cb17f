//! Standard errors used by all functions in the crate.

use std::fmt;

static TRY_AGAIN_MESSAGE: &str = "something went wrong, try again";

/// Error collecting all possible failures of the accounts client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The account to create was never built, e.g. the default value.
    ///
    /// Returned before any request is sent.
    #[error("invalid empty input")]
    EmptyAccount,
    /// The account id is not a UUID, or is the nil UUID.
    ///
    /// Returned before any request is sent.
    #[error("invalid account id: '{0}'")]
    InvalidAccountId(String),
    /// The request body could not be serialized.
    #[error("invalid input structure: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Transport failure, or a response body that could not be read or decoded.
    #[error("something went wrong, try again: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Error returned by an accounts API endpoint.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// The account to delete does not exist.
    #[error("account is not found")]
    NotFound,
    /// The server answered with a status this operation does not expect.
    #[error("something went wrong, try again (HTTP {status})")]
    Unexpected { status: u16 },
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl Error {
    /// Returns the error as a list of human readable messages.
    ///
    /// Remote validation errors produce one entry per line of the server message,
    /// every other error produces exactly one entry.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Error::ApiError(api_error) => api_error.messages(),
            Error::HttpError(_) | Error::Unexpected { .. } => {
                vec![TRY_AGAIN_MESSAGE.to_string()]
            }
            e => vec![e.to_string()],
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// Accounts HTTP APIs error.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub struct ApiError {
    /// HTTP status returned by the server.
    pub status: u16,
    /// Message returned by the server. Validation failures list one problem per line.
    pub error_message: String,
}

impl ApiError {
    /// Splits the server message into discrete errors, one per line.
    pub fn messages(&self) -> Vec<String> {
        self.error_message.split('\n').map(str::to_string).collect()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Accounts API error {}: {}", self.status, self.error_message)
    }
}
