//! OAuth2 user authorization.
//!
//! [`OAuth2UserHandler`] turns a [`ClientCredentials`] registration into an
//! authorization URL and, once the user has approved, into a [`TokenSet`].
//! An [`AccessToken`] can only come out of that exchange.

mod credentials;
mod handler;
mod pkce;
mod tokens;

pub use credentials::ClientCredentials;
pub use handler::{OAuth2UserHandler, PendingAuthorization};
pub use tokens::{AccessToken, TokenSet};
