use super::error::{self, Error, ErrorResp};
use super::{login, signup};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

/// Client for the accounts API
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Client {
    /// The server to connect to. Should only be the protocol and domain, e.g.
    /// `https://accounts.your-domain.com`.
    pub server: String,
}

impl Client {
    /// Construct a new client
    pub fn new(server: String) -> Self {
        Self { server }
    }

    /// Create a new account.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`.
    pub async fn signup(
        &self,
        client: &reqwest::Client,
        req: &signup::Req,
    ) -> error::Result<signup::Resp> {
        let url = Url::parse(&self.server)?.join(signup::PATH)?;

        Self::handle_response(client.post(url).json(req)).await
    }

    /// Log into the server.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`.
    pub async fn login(
        &self,
        client: &reqwest::Client,
        req: &login::Req,
    ) -> error::Result<login::Resp> {
        let url = Url::parse(&self.server)?.join(login::PATH)?;

        Self::handle_response(client.post(url).json(req)).await
    }

    /// Convert an HTTP response into a result, interpreting errors in a
    /// standard way.
    ///
    /// ## Errors
    ///
    /// - `Ok(..)` if the server returned a success (2xx)
    /// - `Error::Client` if the server returned a client error (4xx)
    /// - `Error::Server` if the server returned a server error (5xx)
    /// - `Error::Unexpected` if the server returned something else (the server is
    ///   not supposed to issue redirects or informational responses.)
    async fn handle_response<T>(resp: reqwest::RequestBuilder) -> error::Result<T>
    where
        T: DeserializeOwned,
    {
        let resp = resp.send().await?;

        let status = resp.status();

        if status.is_success() {
            Ok(resp.json().await?)
        } else if status.is_client_error() || status.is_server_error() {
            // middleware and proxies don't always speak our error format
            let message = resp
                .json::<ErrorResp>()
                .await
                .map_or_else(|_| status.to_string(), |err| err.message);

            if status.is_client_error() {
                Err(Error::Client(message))
            } else {
                Err(Error::Server(message))
            }
        } else {
            Err(Error::Unexpected(status))
        }
    }
}
