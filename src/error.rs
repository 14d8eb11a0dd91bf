//! Standard errors used by all functions in the crate.

use serde_json::Value;
use std::fmt;

/// Error collecting all possible failures of the gateway client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client was built with invalid parameters.
    #[error("Invalid client configuration: {0}")]
    Configuration(String),
    /// An operation was called with missing or contradictory parameters.
    ///
    /// No request is sent to the gateway when this error is returned.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Reqwest error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Error returned by a gateway endpoint.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// The gateway URL could not be built.
    #[error("Invalid gateway URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// A successful response carried a body which is not valid JSON.
    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
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

/// Non-successful response returned by the gateway.
///
/// The response body is kept exactly as the gateway sent it: this crate does not
/// map gateway error codes to its own types.
#[derive(thiserror::Error, Debug)]
pub struct ApiError {
    /// HTTP status returned by the gateway.
    pub status: u16,
    /// Decoded response body.
    ///
    /// If the body was not valid JSON, it is stored as a [`Value::String`];
    /// an empty body is stored as [`Value::Null`].
    pub body: Value,
}

impl ApiError {
    /// Value of the `error.cause` field of the gateway payload, if present.
    pub fn cause(&self) -> Option<&str> {
        self.body.pointer("/error/cause").and_then(Value::as_str)
    }

    /// Value of the `error.explanation` field of the gateway payload, if present.
    pub fn explanation(&self) -> Option<&str> {
        self.body.pointer("/error/explanation").and_then(Value::as_str)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gateway HTTP error {}", self.status)?;

        if let Some(cause) = self.cause() {
            write!(f, ": {}", cause)?;
        }

        if let Some(explanation) = self.explanation() {
            write!(f, "\nExplanation: {}", explanation)?;
        }

        Ok(())
    }
}
