use crate::accounts::AccountError;
use accounts_core::api::error::ErrorResp;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Shown when signup is missing a field. One message for every field, since
/// the form shows them all together.
static MISSING_FIELDS_MESSAGE: &str = "All fields are required.";

/// An error from the API
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Something went wrong which we should log but not expose to clients.
    /// Carries the generic message the client gets instead.
    Internal(&'static str),

    /// Some handler-specific error
    Custom(StatusCode, String),
}

impl Error {
    /// Construct a custom error
    pub fn custom(message: &str) -> Self {
        Self::custom_with_status(message, StatusCode::BAD_REQUEST)
    }

    /// Construct a custom error with a specific status code
    pub fn custom_with_status(message: &str, status: StatusCode) -> Self {
        Self::Custom(status, message.to_string())
    }

    /// Translate an account error for the client. Business errors keep their
    /// message; infrastructure errors are logged here and replaced by
    /// `internal`.
    pub fn from_account_error(err: AccountError, internal: &'static str) -> Self {
        match err {
            AccountError::MissingField(field) => {
                tracing::debug!(field, "rejecting request with missing field");
                Self::custom(MISSING_FIELDS_MESSAGE)
            }
            AccountError::AccountExists => Self::custom(&err.to_string()),
            AccountError::InvalidCredentials => {
                Self::custom_with_status(&err.to_string(), StatusCode::UNAUTHORIZED)
            }
            AccountError::Store(_) | AccountError::Hash(_) | AccountError::Task(_) => {
                tracing::error!(?err, "account operation failed");
                Self::Internal(internal)
            }
        }
    }

    /// Unwrap a handler-specific error
    #[cfg(test)]
    pub fn unwrap_custom(self) -> (StatusCode, String) {
        match self {
            Self::Custom(status_code, message) => (status_code, message),
            Self::Internal(_) => panic!("called `Error::unwrap_custom` on an `Internal`"),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message.to_string()),
            Self::Custom(status_code, message) => (status_code, message),
        };

        (status, Json(ErrorResp { message })).into_response()
    }
}
