//! Token types for OAuth2 user authentication.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

use crate::types::Scopes;

/// An access token for authenticated API requests.
///
/// Only a successful token exchange creates one, so an API client can never
/// be built before authorization has completed.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// Create a new access token.
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    ///
    /// # Security
    ///
    /// Use only when constructing HTTP authorization headers.
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// The result of a successful authorization-code exchange.
#[derive(Debug, Clone)]
pub struct TokenSet {
    access_token: AccessToken,
    token_type: String,
    scopes: Option<Scopes>,
    expires_at: Option<DateTime<Utc>>,
}

impl TokenSet {
    pub(crate) fn new(
        access_token: AccessToken,
        token_type: String,
        scopes: Option<Scopes>,
        expires_in: Option<i64>,
    ) -> Self {
        Self {
            access_token,
            token_type,
            scopes,
            expires_at: expires_in
                .and_then(TimeDelta::try_seconds)
                .and_then(|delta| Utc::now().checked_add_signed(delta)),
        }
    }

    /// Returns the access token.
    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Consumes the set, returning the access token.
    pub fn into_access_token(self) -> AccessToken {
        self.access_token
    }

    /// Returns the token type, normally `bearer`.
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Returns the scopes the platform actually granted, if it reported them.
    pub fn scopes(&self) -> Option<&Scopes> {
        self.scopes.as_ref()
    }

    /// Returns when the access token stops being valid, if known.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Check if the token is expired (with a 30 second buffer).
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|at| (at - Utc::now()).num_seconds() <= 30)
    }
}
