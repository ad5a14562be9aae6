use crate::accounts::AccountService;
use axum::extract::FromRef;

/// Shared state needed by requests.
#[derive(Clone, FromRef)]
pub struct State {
    /// Registration and login.
    accounts: AccountService,
}

impl State {
    /// Create a new state.
    pub fn new(accounts: AccountService) -> Self {
        Self { accounts }
    }
}
