use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::AggregateError;
use crate::post::Post;

#[derive(Debug, Deserialize)]
struct PostsEnvelope {
    posts: Vec<Post>,
}

/// Thin wrapper over the upstream blog API. Exactly one network call per
/// `fetch`; no retries, no caching.
#[derive(Debug, Clone)]
pub struct BlogClient {
    client: Client,
    endpoint: Url,
}

impl BlogClient {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// Fetch the raw post list for a single tag. Non-2xx responses and
    /// unparseable bodies surface as errors to the caller.
    pub async fn fetch(&self, tag: &str) -> Result<Vec<Post>, AggregateError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("tag", tag)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AggregateError::UpstreamStatus(status));
        }

        let bytes = response.bytes().await?;
        let envelope: PostsEnvelope = serde_json::from_slice(&bytes)?;
        debug!(tag, count = envelope.posts.len(), "fetched posts for tag");
        Ok(envelope.posts)
    }
}
