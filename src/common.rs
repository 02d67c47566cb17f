use reqwest::StatusCode;

// Defaults
pub static DEFAULT_API_VERSION: &str = "v1";

// Endpoint path segments, relative to the versioned base URL
pub static HEALTH_PATH: &[&str] = &["health"];
pub static ACCOUNTS_PATH: &[&str] = &["organisation", "accounts"];

/// Closed set of outcomes an HTTP status code can be classified into.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ResponseClass {
    /// Any 2xx status.
    Success,
    /// Any 4xx status.
    ClientError,
    /// Everything else: 1xx, 3xx and 5xx.
    Other,
}

impl ResponseClass {
    pub fn of(status: u16) -> Self {
        match status {
            200..=299 => ResponseClass::Success,
            400..=499 => ResponseClass::ClientError,
            _ => ResponseClass::Other,
        }
    }
}

impl From<StatusCode> for ResponseClass {
    fn from(status: StatusCode) -> Self {
        ResponseClass::of(status.as_u16())
    }
}
