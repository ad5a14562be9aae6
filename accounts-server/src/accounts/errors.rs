use argon2::password_hash;
use thiserror::Error;

/// Errors from an [`AccountStore`](super::AccountStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// An account with this email already exists. The store decides this, not
    /// the caller, so it holds even when two inserts race.
    #[error("an account with this email already exists")]
    DuplicateKey,

    /// We couldn't talk to the database, or it failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Errors from an [`AccountService`](super::AccountService) operation.
#[derive(Debug, Error)]
pub enum AccountError {
    /// A required field was empty or missing.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Someone already registered with this email.
    #[error("User already exists!")]
    AccountExists,

    /// This should be the same for both missing accounts and incorrect
    /// passwords so as not to give additional information about what accounts
    /// exist to someone probing the system.
    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// The store failed. Log it, don't show it.
    #[error("storage error: {0}")]
    Store(#[source] StoreError),

    /// Hashing or parsing a stored hash failed.
    #[error("password hashing error: {0}")]
    Hash(password_hash::Error),

    /// The blocking task doing password work panicked or was cancelled.
    #[error("password task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<StoreError> for AccountError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey => Self::AccountExists,
            err @ StoreError::Database(_) => Self::Store(err),
        }
    }
}

impl From<password_hash::Error> for AccountError {
    fn from(err: password_hash::Error) -> Self {
        Self::Hash(err)
    }
}
