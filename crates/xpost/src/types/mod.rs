//! Validated input types.
//!
//! These types check their invariants at construction time, so a value that
//! exists is always safe to send.

mod base_url;
mod post_text;
mod scope;

pub use base_url::BaseUrl;
pub use post_text::PostText;
pub use scope::{DEFAULT_SCOPES, Scopes};
