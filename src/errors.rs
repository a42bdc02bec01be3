use std::fmt;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the REST transport.
///
/// The lookup methods raise nothing of their own: a completed HTTP
/// exchange is always delivered as an [`ApiResponse`](crate::ApiResponse),
/// whatever its status code. `Error` is reserved for requests that never
/// completed: the endpoint and parameters did not form a valid URL, the
/// connection failed or timed out, or the body was not decodable JSON.
#[derive(Debug)]
pub enum Error {
    /// Request execution failed (connect, timeout, body decode).
    Transport(reqwest::Error),
    /// The configured endpoint plus resource path is not a valid URL.
    Endpoint(url::ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "Transport error: {}", e),
            Error::Endpoint(e) => write!(f, "Invalid endpoint URL: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(e) => Some(e),
            Error::Endpoint(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Endpoint(err)
    }
}
