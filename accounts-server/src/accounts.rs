//! Account records, where they live, and the two things you can do with them.

/// A persisted account.
pub mod account;
pub use account::Account;

/// Things that can go wrong with accounts and their storage.
pub mod errors;
pub use errors::{AccountError, StoreError};

/// Password hashing.
pub mod password;
pub use password::Hasher;

/// Registration and authentication.
pub mod service;
pub use service::AccountService;

/// Where accounts are persisted.
pub mod store;
pub use store::{AccountStore, MemoryAccountStore, PgAccountStore};
