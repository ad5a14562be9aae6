use argon2::{
    password_hash::{
        self, rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use std::fmt;

/// Hashes passwords for storage and checks them at login.
#[derive(Clone, Default)]
pub struct Hasher {
    /// Hashing parameters. Verification reads parameters from the stored hash
    /// instead, so changing these doesn't lock anyone out.
    argon2: Argon2<'static>,
}

impl Hasher {
    /// Use argon2id with custom cost parameters.
    pub fn new(params: Params) -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    /// The cheapest parameters argon2 allows. Only for tests.
    #[cfg(test)]
    pub fn fast() -> Self {
        Self::new(
            Params::new(Params::MIN_M_COST, Params::MIN_T_COST, Params::MIN_P_COST, None)
                .expect("minimum params are valid"),
        )
    }

    /// Hash a password with a fresh salt.
    ///
    /// ## Errors
    ///
    /// Only if argon2 itself fails, which shouldn't happen with valid params.
    pub fn hash(&self, password: &str) -> Result<String, password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);

        Ok(self
            .argon2
            .hash_password(password.as_bytes(), &salt)?
            .to_string())
    }

    /// Check a password against a stored hash. A mismatch is `Ok(false)`, not
    /// an error.
    ///
    /// ## Errors
    ///
    /// If the stored hash can't be parsed or verification fails for some other
    /// reason than a wrong password.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, password_hash::Error> {
        let hash = PasswordHash::new(hash)?;

        match self.argon2.verify_password(password.as_bytes(), &hash) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(err),
        }
    }
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hasher").finish_non_exhaustive()
    }
}
