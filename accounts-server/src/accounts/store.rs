use super::{Account, StoreError};
use async_trait::async_trait;

mod memory;
pub use memory::MemoryAccountStore;

mod postgres;
pub use postgres::PgAccountStore;

/// Persistent accounts, keyed by email.
#[async_trait]
pub trait AccountStore: Send + Sync + 'static {
    /// Look up an account by its exact email. No side effects.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;

    /// Persist a new account. Fails with [`StoreError::DuplicateKey`] if an
    /// account with the same email exists, checked atomically with the write.
    async fn insert(&self, account: &Account) -> Result<(), StoreError>;
}
