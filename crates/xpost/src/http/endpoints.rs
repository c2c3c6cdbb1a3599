//! Endpoint paths and request/response types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Endpoint Paths
// ============================================================================

/// Path of the post creation endpoint, relative to the API base URL.
pub const CREATE_POST: &str = "2/tweets";

/// Grant type for exchanging an authorization code.
pub const GRANT_AUTHORIZATION_CODE: &str = "authorization_code";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Form body for the authorization-code token request.
#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub grant_type: &'a str,
    pub code: &'a str,
    pub redirect_uri: &'a str,
    pub code_verifier: &'a str,
    pub client_id: &'a str,
}

/// Response from the token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub scope: Option<String>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Request body for post creation.
#[derive(Debug, Serialize)]
pub struct CreatePostRequest<'a> {
    pub text: &'a str,
}

/// Response from post creation.
#[derive(Debug, Deserialize)]
pub struct CreatePostResponse {
    pub data: CreatedPost,
}

/// The `data` object of a post creation response.
#[derive(Debug, Deserialize)]
pub struct CreatedPost {
    pub id: String,
    pub text: String,
}

/// Error bodies the platform returns.
///
/// The OAuth endpoints use `error`/`error_description`; the v2 API uses a
/// problem object with `title`/`detail`; older endpoints send an `errors`
/// list. Every field is optional so one type covers all three.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub errors: Vec<ErrorEntry>,
}

/// One entry of an `errors` list.
#[derive(Debug, Deserialize)]
pub struct ErrorEntry {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Returns the machine-readable part: OAuth error code or problem title.
    pub fn code(&self) -> Option<String> {
        self.error.clone().or_else(|| self.title.clone()).or_else(|| {
            self.errors
                .first()
                .and_then(|e| e.code.as_ref())
                .map(|c| match c {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
        })
    }

    /// Returns the human-readable part.
    pub fn message(&self) -> Option<String> {
        self.error_description
            .clone()
            .or_else(|| self.detail.clone())
            .or_else(|| self.errors.iter().find_map(|e| e.message.clone()))
    }
}
