//! Wire types and a client shared by the accounts server and its consumers.

/// Talk to the accounts API.
pub mod api;
pub use api::Client;
