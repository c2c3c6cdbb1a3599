//! Platform endpoint configuration.

use crate::Result;
use crate::types::BaseUrl;

/// Production authorization endpoint.
pub const AUTHORIZE_URL: &str = "https://twitter.com/i/oauth2/authorize";

/// Production token endpoint.
pub const TOKEN_URL: &str = "https://api.twitter.com/2/oauth2/token";

/// Production API base URL.
pub const API_URL: &str = "https://api.twitter.com";

/// The three URLs the authorization and posting flow talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Page the user visits to approve the application.
    pub authorize: BaseUrl,
    /// Endpoint that exchanges an authorization code for a token.
    pub token: BaseUrl,
    /// Base URL for API calls.
    pub api: BaseUrl,
}

impl Endpoints {
    /// Build endpoints from URL strings.
    pub fn new(
        authorize: impl AsRef<str>,
        token: impl AsRef<str>,
        api: impl AsRef<str>,
    ) -> Result<Self> {
        Ok(Self {
            authorize: BaseUrl::new(authorize)?,
            token: BaseUrl::new(token)?,
            api: BaseUrl::new(api)?,
        })
    }

    /// The production X (Twitter) endpoints.
    pub fn twitter() -> Result<Self> {
        Self::new(AUTHORIZE_URL, TOKEN_URL, API_URL)
    }
}
