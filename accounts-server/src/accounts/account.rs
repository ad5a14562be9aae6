use accounts_core::api::login::User;

/// An account as it is stored. Never sent to clients directly; use
/// [`Account::public`] for that.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Account {
    /// Display name.
    pub name: String,

    /// Login email. Unique across all accounts.
    pub email: String,

    /// Argon2 hash of the password, in PHC string format.
    pub password_hash: String,

    /// Contact phone number.
    pub phone: String,
}

impl Account {
    /// The parts of the account that are safe to hand back to the account
    /// holder.
    pub fn public(&self) -> User {
        User {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}
