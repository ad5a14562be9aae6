use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Easy alias for error handling
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can happen while processing requests
#[derive(Debug, Error)]
pub enum Error {
    /// We couldn't parse a URL, for example if the base URL was invalid.
    #[error("URL error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// We couldn't talk to the server at all, or couldn't read its response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the request (4xx). The message is meant for
    /// humans, e.g. "User already exists!"
    #[error("{0}")]
    Client(String),

    /// The server failed while handling the request (5xx).
    #[error("server error: {0}")]
    Server(String),

    /// The server returned a status we don't expect from it (1xx, 3xx.)
    #[error("unexpected status: {0}")]
    Unexpected(reqwest::StatusCode),
}

/// The body of every non-success response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResp {
    /// Human-readable description of what went wrong.
    pub message: String,
}
