//! Error types for the xpost library.
//!
//! A single error type with explicit variants for transport, authorization,
//! protocol and input validation failures.

use std::fmt;
use thiserror::Error;

/// The unified error type for xpost operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authorization errors (denied consent, state mismatch, missing code).
    #[error("authorization error: {0}")]
    Auth(#[from] AuthError),

    /// Protocol errors (non-success responses from the platform).
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors (bad URL, scope, post text).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Response body could not be decoded.
    #[error("failed to decode response: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                message: err.to_string(),
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else if err.is_decode() {
            TransportError::Decode {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Errors raised while completing the authorization-code grant.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The user (or the platform) refused the authorization request.
    #[error("authorization denied: {error}{}", parenthesized(.description))]
    AuthorizationDenied {
        error: String,
        description: Option<String>,
    },

    /// The redirect URL carried no `state` parameter.
    #[error("redirect URL has no state parameter")]
    MissingState,

    /// The `state` parameter does not match the one sent with the request.
    #[error("state mismatch: the redirect does not belong to this authorization request")]
    StateMismatch,

    /// The redirect URL carried no authorization code.
    #[error("redirect URL has no authorization code")]
    MissingCode,
}

fn parenthesized(description: &Option<String>) -> String {
    description
        .as_deref()
        .map(|d| format!(" ({d})"))
        .unwrap_or_default()
}

/// Protocol-level errors from non-success HTTP responses.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Machine-readable error code or title, if present.
    pub error: Option<String>,
    /// Human-readable message, if present.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, error: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            error,
            message,
        }
    }

    /// Check if the platform rejected the client or token.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
            || self.error.as_deref() == Some("invalid_client")
            || self.error.as_deref() == Some("invalid_grant")
            || self.error.as_deref() == Some("invalid_token")
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid endpoint base URL.
    #[error("invalid endpoint URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// Invalid redirect URI in the client configuration.
    #[error("invalid redirect URI '{value}': {reason}")]
    RedirectUri { value: String, reason: String },

    /// Invalid redirect URL pasted back after authorization.
    #[error("invalid redirect URL: {reason}")]
    RedirectUrl { reason: String },

    /// Invalid OAuth2 scope token.
    #[error("invalid scope '{value}': {reason}")]
    Scope { value: String, reason: String },

    /// Invalid client identifier.
    #[error("invalid client id: {reason}")]
    ClientId { reason: String },

    /// Invalid post text.
    #[error("invalid post text: {reason}")]
    PostText { reason: String },
}
