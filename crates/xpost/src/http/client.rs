//! HTTP client shared by the token exchange and the API client.

use reqwest::header::{ACCEPT, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use crate::auth::AccessToken;
use crate::error::{Error, ProtocolError};

use super::endpoints::ErrorResponse;

/// Thin wrapper around [`reqwest::Client`] that decodes platform responses.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new client with the crate's user agent.
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("xpost/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// POST an `application/x-www-form-urlencoded` body.
    ///
    /// When `basic_auth` is given the request carries HTTP Basic
    /// credentials, as confidential OAuth clients must.
    #[instrument(skip(self, form, basic_auth))]
    pub async fn post_form<F, R>(
        &self,
        url: &str,
        form: &F,
        basic_auth: Option<(&str, &str)>,
    ) -> Result<R, Error>
    where
        F: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(authenticated = basic_auth.is_some(), "form POST");

        let mut request = self
            .client
            .post(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .form(form);

        if let Some((user, password)) = basic_auth {
            request = request.basic_auth(user, Some(password));
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// POST a JSON body with a bearer token.
    #[instrument(skip(self, body, token))]
    pub async fn post_json_authed<B, R>(
        &self,
        url: &str,
        body: &B,
        token: &AccessToken,
    ) -> Result<R, Error>
    where
        B: Serialize + std::fmt::Debug + ?Sized,
        R: DeserializeOwned,
    {
        debug!("authenticated JSON POST");
        trace!(?body, "request body");

        let response = self
            .client
            .post(url)
            .bearer_auth(token.as_str())
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle a response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "HTTP response");

        if status.is_success() {
            let body = response.json::<R>().await?;
            Ok(body)
        } else {
            let error = self.parse_error_response(response).await;
            Err(Error::Protocol(error))
        }
    }

    /// Parse an error response body, tolerating anything.
    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();

        match response.json::<ErrorResponse>().await {
            Ok(body) => ProtocolError::new(status, body.code(), body.message()),
            Err(_) => ProtocolError::new(status, None, None),
        }
    }
}
