use super::{Account, AccountError, AccountStore, Hasher};
use accounts_core::api::{login, signup};
use argon2::password_hash;
use std::sync::Arc;

/// Registers and authenticates accounts. Holds no state of its own beyond a
/// handle to the store, so clones are cheap and share everything.
#[derive(Clone)]
pub struct AccountService {
    /// Where accounts live.
    store: Arc<dyn AccountStore>,

    /// How passwords are hashed and checked.
    hasher: Hasher,
}

impl AccountService {
    /// Create a service over the given store with default hashing costs.
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self::with_hasher(store, Hasher::default())
    }

    /// Create a service with a specific hasher.
    pub fn with_hasher(store: Arc<dyn AccountStore>, hasher: Hasher) -> Self {
        Self { store, hasher }
    }

    /// Create a new account.
    ///
    /// ## Errors
    ///
    /// - `MissingField` if any field is empty
    /// - `AccountExists` if the email is taken, including when another
    ///   registration for the same email wins a race with this one
    /// - `Store`, `Hash` or `Task` for infrastructure failures
    #[tracing::instrument(skip_all, fields(email = %req.email))]
    pub async fn register(&self, req: signup::Req) -> Result<(), AccountError> {
        for (field, value) in [
            ("name", &req.name),
            ("email", &req.email),
            ("password", &req.password),
            ("phone", &req.phone),
        ] {
            if value.is_empty() {
                return Err(AccountError::MissingField(field));
            }
        }

        if self.store.find_by_email(&req.email).await?.is_some() {
            return Err(AccountError::AccountExists);
        }

        let hasher = self.hasher.clone();
        let password = req.password;
        let password_hash = blocking(move || hasher.hash(&password)).await?;

        // the store has the last word on uniqueness: a duplicate here comes
        // back as AccountExists
        self.store
            .insert(&Account {
                name: req.name,
                email: req.email,
                password_hash,
                phone: req.phone,
            })
            .await?;

        tracing::info!("registered new account");

        Ok(())
    }

    /// Check an email and password, returning the public view of the account.
    ///
    /// ## Errors
    ///
    /// - `InvalidCredentials` if there's no such account or the password is
    ///   wrong (indistinguishably)
    /// - `Store`, `Hash` or `Task` for infrastructure failures
    #[tracing::instrument(skip_all, fields(email = %req.email))]
    pub async fn authenticate(&self, req: login::Req) -> Result<login::User, AccountError> {
        let Some(account) = self.store.find_by_email(&req.email).await? else {
            tracing::debug!("no such account");
            return Err(AccountError::InvalidCredentials);
        };

        let hasher = self.hasher.clone();
        let password = req.password;
        let hash = account.password_hash.clone();
        if !blocking(move || hasher.verify(&password, &hash)).await? {
            tracing::debug!("wrong password");
            return Err(AccountError::InvalidCredentials);
        }

        Ok(account.public())
    }
}

/// Run password hashing or verification on tokio's blocking pool, so argon2
/// doesn't stall the threads serving other requests.
async fn blocking<T, F>(work: F) -> Result<T, AccountError>
where
    F: FnOnce() -> Result<T, password_hash::Error> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(work).await??)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::accounts::{MemoryAccountStore, StoreError};
    use async_trait::async_trait;

    fn service() -> (Arc<MemoryAccountStore>, AccountService) {
        let store = Arc::new(MemoryAccountStore::new());
        let service = AccountService::with_hasher(store.clone(), Hasher::fast());

        (store, service)
    }

    fn ann() -> signup::Req {
        signup::Req {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            password: "pw1".to_string(),
            phone: "555-1".to_string(),
        }
    }

    fn creds(email: &str, password: &str) -> login::Req {
        login::Req {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_register_stores_hash() {
        let (store, service) = service();

        service.register(ann()).await.unwrap();

        let stored = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(stored.name, "Ann");
        assert_eq!(stored.phone, "555-1");
        assert_ne!(stored.password_hash, "pw1");
    }

    #[test_log::test(tokio::test)]
    async fn test_register_twice() {
        let (store, service) = service();
        service.register(ann()).await.unwrap();

        let err = service
            .register(signup::Req {
                name: "Bob".to_string(),
                password: "other".to_string(),
                phone: "555-2".to_string(),
                ..ann()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AccountError::AccountExists), "{err:?}");
        let stored = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(stored.name, "Ann");
    }

    #[test_log::test(tokio::test)]
    async fn test_register_missing_field() {
        let (store, service) = service();

        let err = service
            .register(signup::Req {
                phone: String::new(),
                ..ann()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AccountError::MissingField("phone")), "{err:?}");
        assert_eq!(store.find_by_email("a@x.com").await.unwrap(), None);
    }

    #[test_log::test(tokio::test)]
    async fn test_authenticate_success() {
        let (_, service) = service();
        service.register(ann()).await.unwrap();

        let user = service.authenticate(creds("a@x.com", "pw1")).await.unwrap();

        assert_eq!(
            user,
            login::User {
                name: "Ann".to_string(),
                email: "a@x.com".to_string(),
            }
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_authenticate_wrong_password() {
        let (_, service) = service();
        service.register(ann()).await.unwrap();

        let err = service
            .authenticate(creds("a@x.com", "wrong"))
            .await
            .unwrap_err();

        assert!(matches!(err, AccountError::InvalidCredentials), "{err:?}");
    }

    #[test_log::test(tokio::test)]
    async fn test_authenticate_unknown_email() {
        let (_, service) = service();
        service.register(ann()).await.unwrap();

        let missing = service
            .authenticate(creds("nouser@x.com", "pw1"))
            .await
            .unwrap_err();
        let wrong = service
            .authenticate(creds("a@x.com", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(missing.to_string(), wrong.to_string());
    }

    #[test_log::test(tokio::test(flavor = "multi_thread", worker_threads = 4))]
    async fn test_concurrent_registrations_admit_one() {
        let (_, service) = service();

        let tasks: Vec<_> = (0..8)
            .map(|n| {
                let service = service.clone();
                tokio::spawn(async move {
                    service
                        .register(signup::Req {
                            name: format!("racer {n}"),
                            ..ann()
                        })
                        .await
                })
            })
            .collect();

        let mut successes = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(()) => successes += 1,
                Err(AccountError::AccountExists) => {}
                Err(err) => panic!("unexpected error: {err:?}"),
            }
        }

        assert_eq!(successes, 1);
    }

    /// Never finds anything, as if every lookup lost a race with an insert.
    struct LookupMisses(MemoryAccountStore);

    #[async_trait]
    impl AccountStore for LookupMisses {
        async fn find_by_email(&self, _email: &str) -> Result<Option<Account>, StoreError> {
            Ok(None)
        }

        async fn insert(&self, account: &Account) -> Result<(), StoreError> {
            self.0.insert(account).await
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_register_lost_race() {
        let service = AccountService::with_hasher(
            Arc::new(LookupMisses(MemoryAccountStore::new())),
            Hasher::fast(),
        );
        service.register(ann()).await.unwrap();

        let err = service.register(ann()).await.unwrap_err();

        assert!(matches!(err, AccountError::AccountExists), "{err:?}");
    }

    /// Fails every operation.
    struct Broken;

    #[async_trait]
    impl AccountStore for Broken {
        async fn find_by_email(&self, _email: &str) -> Result<Option<Account>, StoreError> {
            Err(StoreError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn insert(&self, _account: &Account) -> Result<(), StoreError> {
            Err(StoreError::Database(sqlx::Error::PoolTimedOut))
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_store_failures_propagate() {
        let service = AccountService::with_hasher(Arc::new(Broken), Hasher::fast());

        let register = service.register(ann()).await.unwrap_err();
        let authenticate = service
            .authenticate(creds("a@x.com", "pw1"))
            .await
            .unwrap_err();

        assert!(matches!(register, AccountError::Store(_)), "{register:?}");
        assert!(
            matches!(authenticate, AccountError::Store(_)),
            "{authenticate:?}"
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_password_work_leaves_the_runtime_thread() {
        let here = std::thread::current().id();

        let there = blocking(|| Ok(std::thread::current().id())).await.unwrap();

        assert_ne!(here, there);
    }
}
