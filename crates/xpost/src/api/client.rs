//! Authenticated API client.

use tracing::{debug, info, instrument};

use crate::Result;
use crate::auth::AccessToken;
use crate::config::Endpoints;
use crate::http::HttpClient;
use crate::http::endpoints::{CREATE_POST, CreatePostRequest, CreatePostResponse};
use crate::types::{BaseUrl, PostText};

use super::Post;

/// Client for API calls made on behalf of the authorized user.
#[derive(Clone)]
pub struct ApiClient {
    api: BaseUrl,
    token: AccessToken,
    http: HttpClient,
}

impl ApiClient {
    /// Create a client that authenticates with `token`.
    pub fn new(endpoints: &Endpoints, token: AccessToken) -> Result<Self> {
        Ok(Self {
            api: endpoints.api.clone(),
            token,
            http: HttpClient::new()?,
        })
    }

    /// Publish a post with exactly the given text.
    #[instrument(skip(self, text), fields(chars = text.char_count()))]
    pub async fn create_post(&self, text: &PostText) -> Result<Post> {
        debug!("Creating post");

        let request = CreatePostRequest {
            text: text.as_str(),
        };

        let response: CreatePostResponse = self
            .http
            .post_json_authed(&self.api.join(CREATE_POST), &request, &self.token)
            .await?;

        let post = Post {
            id: response.data.id,
            text: response.data.text,
        };

        info!(id = %post.id, "Post created");
        Ok(post)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api", &self.api)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
