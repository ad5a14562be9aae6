use serde::{Deserialize, Serialize};

/// The request to log in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Req {
    /// Email the account was registered with.
    #[serde(default)]
    pub email: String,

    /// Plaintext password to check.
    #[serde(default)]
    pub password: String,
}

/// Result of logging in.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resp {
    /// Confirmation message.
    pub message: String,

    /// Who logged in.
    pub user: User,
}

/// The public view of an account. Passwords and phone numbers never leave the
/// server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Display name.
    pub name: String,

    /// Login email.
    pub email: String,
}

/// Where the login endpoint lives.
pub const PATH: &str = "/login";

/// Message returned on success.
pub const SUCCESS_MESSAGE: &str = "Login successful!";
