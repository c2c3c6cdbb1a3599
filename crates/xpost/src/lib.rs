//! xpost - OAuth2 user authorization and posting for the X (Twitter) API v2.
//!
//! The flow has two steps. An [`OAuth2UserHandler`] produces an authorization
//! URL and, given the redirect URL the user lands on, exchanges it for a
//! [`TokenSet`]. An [`ApiClient`] built from that token creates posts.
//!
//! # Example
//!
//! ```no_run
//! use xpost::{ApiClient, ClientCredentials, Endpoints, OAuth2UserHandler, PostText, Scopes};
//!
//! # async fn example() -> Result<(), xpost::Error> {
//! let endpoints = Endpoints::twitter()?;
//! let creds = ClientCredentials::new("client-id", Some("client-secret"), "https://localhost")?;
//! let handler = OAuth2UserHandler::new(creds, Scopes::default(), endpoints.clone())?;
//!
//! let pending = handler.authorization_url();
//! println!("Visit: {}", pending.url());
//!
//! let redirect = "https://localhost/?state=...&code=...";
//! let tokens = handler.fetch_token(pending, redirect).await?;
//!
//! let client = ApiClient::new(&endpoints, tokens.into_access_token())?;
//! let post = client.create_post(&PostText::new("hi")?).await?;
//! println!("{}", post.url());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
mod http;
pub mod types;

// Re-export primary types at crate root for convenience
pub use api::{ApiClient, Post};
pub use auth::{AccessToken, ClientCredentials, OAuth2UserHandler, PendingAuthorization, TokenSet};
pub use config::Endpoints;
pub use error::Error;
pub use types::{BaseUrl, PostText, Scopes};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
