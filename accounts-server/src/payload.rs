use crate::error::Error;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

/// A request body sent either as JSON or as an HTML form
/// (`application/x-www-form-urlencoded`), chosen by `Content-Type`. Anything
/// that isn't a form is treated as JSON.
#[derive(Debug)]
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    tracing::debug!(?rejection, "rejecting form body");
                    Error::custom_with_status(&rejection.body_text(), rejection.status())
                })?;

            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    tracing::debug!(?rejection, "rejecting JSON body");
                    Error::custom_with_status(&rejection.body_text(), rejection.status())
                })?;

            Ok(Self(value))
        }
    }
}
