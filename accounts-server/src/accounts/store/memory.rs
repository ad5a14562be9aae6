use super::AccountStore;
use crate::accounts::{Account, StoreError};
use async_trait::async_trait;
use std::collections::{hash_map::Entry, HashMap};
use tokio::sync::RwLock;

/// Accounts held in process memory. Lost on restart.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    /// Accounts by email.
    accounts: RwLock<HashMap<String, Account>>,
}

impl MemoryAccountStore {
    /// Create an empty store.
    pub fn new() -> Self {
        tracing::info!("Creating new in-memory account store");
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn insert(&self, account: &Account) -> Result<(), StoreError> {
        // check and insert under the same write guard
        match self.accounts.write().await.entry(account.email.clone()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateKey),
            Entry::Vacant(slot) => {
                slot.insert(account.clone());
                Ok(())
            }
        }
    }
}
