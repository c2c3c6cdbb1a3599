//! OAuth2 authorization-code flow with PKCE.

use std::fmt;

use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::Result;
use crate::config::Endpoints;
use crate::error::{AuthError, InvalidInputError};
use crate::http::HttpClient;
use crate::http::endpoints::{GRANT_AUTHORIZATION_CODE, TokenRequest, TokenResponse};
use crate::types::Scopes;

use super::pkce::{CodeVerifier, random_state};
use super::{AccessToken, ClientCredentials, TokenSet};

/// Drives the authorization-code grant for one application.
///
/// ```no_run
/// use xpost::{ClientCredentials, Endpoints, OAuth2UserHandler, Scopes};
///
/// # async fn example() -> Result<(), xpost::Error> {
/// let creds = ClientCredentials::new("client-id", Some("client-secret"), "https://localhost")?;
/// let handler = OAuth2UserHandler::new(creds, Scopes::default(), Endpoints::twitter()?)?;
///
/// let pending = handler.authorization_url();
/// println!("{}", pending.url());
///
/// // ... the user approves and pastes the redirect URL back ...
/// let redirect = "https://localhost/?state=...&code=...";
/// let tokens = handler.fetch_token(pending, redirect).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OAuth2UserHandler {
    credentials: ClientCredentials,
    scopes: Scopes,
    endpoints: Endpoints,
    http: HttpClient,
}

/// An authorization request waiting for the user's approval.
///
/// Holds the URL to visit and the secrets needed to finish the exchange.
/// [`OAuth2UserHandler::fetch_token`] consumes it, so each request can be
/// completed at most once.
pub struct PendingAuthorization {
    url: Url,
    state: String,
    verifier: CodeVerifier,
}

impl PendingAuthorization {
    /// Returns the URL the user must visit.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the anti-forgery `state` value embedded in the URL.
    pub fn state(&self) -> &str {
        &self.state
    }
}

impl fmt::Debug for PendingAuthorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingAuthorization")
            .field("url", &self.url.as_str())
            .field("state", &self.state)
            .field("verifier", &self.verifier)
            .finish()
    }
}

/// Query parameters of the redirect the platform sent the user to.
#[derive(Debug, Default)]
struct Callback {
    code: Option<String>,
    state: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

impl Callback {
    fn parse(redirect_url: &str) -> Result<Self> {
        let url = Url::parse(redirect_url).map_err(|e| InvalidInputError::RedirectUrl {
            reason: e.to_string(),
        })?;

        let mut callback = Callback::default();
        for (key, value) in url.query_pairs() {
            let slot = match &*key {
                "code" => &mut callback.code,
                "state" => &mut callback.state,
                "error" => &mut callback.error,
                "error_description" => &mut callback.error_description,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        Ok(callback)
    }

    /// Check the callback against the pending request and return the code.
    ///
    /// The state is checked first, error redirects included.
    fn into_code(self, expected_state: &str) -> Result<String> {
        let state = self.state.ok_or(AuthError::MissingState)?;
        if state != expected_state {
            warn!("State mismatch in redirect URL");
            return Err(AuthError::StateMismatch.into());
        }

        if let Some(error) = self.error {
            return Err(AuthError::AuthorizationDenied {
                error,
                description: self.error_description,
            }
            .into());
        }

        match self.code {
            Some(code) if !code.is_empty() => Ok(code),
            _ => Err(AuthError::MissingCode.into()),
        }
    }
}

impl OAuth2UserHandler {
    /// Create a handler for the given client registration.
    pub fn new(credentials: ClientCredentials, scopes: Scopes, endpoints: Endpoints) -> Result<Self> {
        Ok(Self {
            credentials,
            scopes,
            endpoints,
            http: HttpClient::new()?,
        })
    }

    /// Returns the client credentials.
    pub fn credentials(&self) -> &ClientCredentials {
        &self.credentials
    }

    /// Returns the requested scopes.
    pub fn scopes(&self) -> &Scopes {
        &self.scopes
    }

    /// Start an authorization request with a fresh state and PKCE verifier.
    pub fn authorization_url(&self) -> PendingAuthorization {
        self.authorization_url_with(random_state(), CodeVerifier::generate())
    }

    fn authorization_url_with(&self, state: String, verifier: CodeVerifier) -> PendingAuthorization {
        let mut url = self.endpoints.authorize.as_url().clone();
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", self.credentials.client_id())
            .append_pair("redirect_uri", self.credentials.redirect_uri())
            .append_pair("scope", &self.scopes.to_string())
            .append_pair("state", &state)
            .append_pair("code_challenge", &verifier.challenge())
            .append_pair("code_challenge_method", "S256");

        debug!(scopes = %self.scopes, "Generated authorization URL");

        PendingAuthorization {
            url,
            state,
            verifier,
        }
    }

    /// Exchange the redirect URL the user landed on for an access token.
    ///
    /// `redirect_url` must be the full URL, including its query string.
    ///
    /// # Errors
    ///
    /// Fails if the URL cannot be parsed, reports an authorization error,
    /// carries the wrong `state` or no code, or if the token endpoint rejects
    /// the exchange.
    #[instrument(skip_all, fields(client_id = %self.credentials.client_id()))]
    pub async fn fetch_token(
        &self,
        pending: PendingAuthorization,
        redirect_url: &str,
    ) -> Result<TokenSet> {
        let code = Callback::parse(redirect_url)?.into_code(&pending.state)?;

        info!("Exchanging authorization code for an access token");

        let request = TokenRequest {
            grant_type: GRANT_AUTHORIZATION_CODE,
            code: &code,
            redirect_uri: self.credentials.redirect_uri(),
            code_verifier: pending.verifier.as_str(),
            client_id: self.credentials.client_id(),
        };

        let basic_auth = self
            .credentials
            .client_secret()
            .map(|secret| (self.credentials.client_id(), secret));

        let response: TokenResponse = self
            .http
            .post_form(self.endpoints.token.as_str(), &request, basic_auth)
            .await?;

        let scopes = match response.scope.as_deref().map(str::parse::<Scopes>) {
            Some(Ok(scopes)) => Some(scopes),
            Some(Err(e)) => {
                warn!(error = %e, "Ignoring unparseable granted scope");
                None
            }
            None => None,
        };

        debug!(
            token_type = %response.token_type,
            expires_in = ?response.expires_in,
            "Obtained access token"
        );

        Ok(TokenSet::new(
            AccessToken::new(response.access_token),
            response.token_type,
            scopes,
            response.expires_in,
        ))
    }
}
