/// Things that can go wrong in the API
pub mod error;
pub use error::Error;

/// A client for the API
pub mod client;
pub use client::Client;

/// Log in with an existing account
pub mod login;

/// Create a new account
pub mod signup;
