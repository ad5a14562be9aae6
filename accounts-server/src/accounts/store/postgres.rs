use super::AccountStore;
use crate::accounts::{Account, StoreError};
use async_trait::async_trait;
use sqlx::{migrate::MigrateError, PgPool};

/// Accounts in the `accounts` table. The table's `UNIQUE` constraint on
/// `email` is what enforces one account per email.
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    /// Database connection pool.
    pool: PgPool,
}

impl PgAccountStore {
    /// Wrap an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Bring the schema up to date.
    ///
    /// ## Errors
    ///
    /// If a migration fails to apply or the database has migrations we don't
    /// know about.
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        sqlx::migrate!().run(&self.pool).await
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT name, email, password_hash, phone FROM accounts WHERE email = $1 LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn insert(&self, account: &Account) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO accounts (name, email, password_hash, phone) VALUES ($1, $2, $3, $4)",
        )
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(&account.phone)
        .execute(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::DuplicateKey
            }
            err => StoreError::Database(err),
        })?;

        Ok(())
    }
}
