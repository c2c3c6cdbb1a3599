//! OAuth2 client credentials.

use std::fmt;

use url::Url;

use crate::Result;
use crate::error::InvalidInputError;

/// The application's OAuth2 client registration.
///
/// Holds the client identifier, the optional client secret and the redirect
/// URI registered in the developer portal. Without a secret the application
/// acts as a public client and relies on PKCE alone.
///
/// # Security
///
/// The secret is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use xpost::ClientCredentials;
///
/// let creds = ClientCredentials::new("my-client-id", Some("shh"), "https://localhost").unwrap();
/// assert_eq!(creds.client_id(), "my-client-id");
/// assert!(creds.is_confidential());
/// assert!(!format!("{:?}", creds).contains("shh"));
/// ```
#[derive(Clone)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: Option<String>,
    redirect_uri: String,
}

impl ClientCredentials {
    /// Create new credentials.
    ///
    /// An empty secret is treated as no secret.
    ///
    /// # Errors
    ///
    /// Returns an error if the client id is blank or the redirect URI is not
    /// an absolute URL without a fragment.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: Option<impl Into<String>>,
        redirect_uri: impl AsRef<str>,
    ) -> Result<Self> {
        let client_id = client_id.into();
        if client_id.trim().is_empty() {
            return Err(InvalidInputError::ClientId {
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        let redirect = redirect_uri.as_ref();
        let parsed = Url::parse(redirect).map_err(|e| InvalidInputError::RedirectUri {
            value: redirect.to_string(),
            reason: e.to_string(),
        })?;

        // RFC 6749 section 3.1.2
        if parsed.fragment().is_some() {
            return Err(InvalidInputError::RedirectUri {
                value: redirect.to_string(),
                reason: "must not contain a fragment".to_string(),
            }
            .into());
        }

        let client_secret = client_secret
            .map(Into::into)
            .filter(|s: &String| !s.is_empty());

        // Sent as given: the platform compares it to the registered value
        // byte for byte, and parsing would append a trailing slash.
        Ok(Self {
            client_id,
            client_secret,
            redirect_uri: redirect.to_string(),
        })
    }

    /// Returns the client identifier.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the redirect URI, exactly as it is sent to the platform.
    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    /// Returns true if a client secret is configured.
    pub fn is_confidential(&self) -> bool {
        self.client_secret.is_some()
    }

    /// Returns the client secret.
    ///
    /// # Security
    ///
    /// Use this only when constructing token requests.
    pub(crate) fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}
