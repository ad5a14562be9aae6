use serde::{Deserialize, Serialize};

/// The request to create a new account. Missing fields deserialize as empty
/// strings so the server can reject them with a single validation message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Req {
    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Email to use for contact and login. Must be unique.
    #[serde(default)]
    pub email: String,

    /// Plaintext password to use for login.
    #[serde(default)]
    pub password: String,

    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
}

/// Result of creating an account. Deliberately carries no account data.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resp {
    /// Confirmation message.
    pub message: String,
}

/// Where the signup endpoint lives.
pub const PATH: &str = "/signup";

/// Message returned on success.
pub const SUCCESS_MESSAGE: &str = "Signup successful!";
