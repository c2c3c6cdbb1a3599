//! Platform API calls made with a user access token.

mod client;
mod post;

pub use client::ApiClient;
pub use post::Post;
