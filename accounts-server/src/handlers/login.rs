use crate::accounts::AccountService;
use crate::error::Error;
use crate::payload::Payload;
use accounts_core::api::login::{Req, Resp, SUCCESS_MESSAGE};
use axum::{extract::State, Json};

/// What clients see when login fails for reasons that aren't theirs.
static SERVER_ERROR_MESSAGE: &str = "Server error during login.";

#[tracing::instrument(skip_all)]
pub async fn handler(
    State(accounts): State<AccountService>,
    Payload(req): Payload<Req>,
) -> Result<Json<Resp>, Error> {
    let user = accounts
        .authenticate(req)
        .await
        .map_err(|err| Error::from_account_error(err, SERVER_ERROR_MESSAGE))?;

    Ok(Json(Resp {
        message: SUCCESS_MESSAGE.to_string(),
        user,
    }))
}
