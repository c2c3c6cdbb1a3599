//! Post type.

use serde::{Deserialize, Serialize};

/// A post as returned by the platform after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Platform-assigned post id.
    pub id: String,

    /// The text as stored by the platform.
    pub text: String,
}

impl Post {
    /// Returns a permalink to the post.
    pub fn url(&self) -> String {
        format!("https://twitter.com/i/status/{}", self.id)
    }
}
