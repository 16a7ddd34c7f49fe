//! HTTP client for the hosted CMS.

use super::ContentRepository;
use crate::constants::CMS_COLLECTIONS_PATH;
use crate::RepositoryError;
use async_trait::async_trait;
use cms::ItemsEnvelope;
use scamwatch_types::CollectionName;
use std::time::Duration;
use tracing::info;

/// Fetch-all client for the CMS REST endpoint `GET {base}/collections/{name}/items`.
pub struct HttpContentRepository {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpContentRepository {
    /// Create a client for the given CMS base URL.
    ///
    /// `base_url` should be like `https://cms.example.com/api` (trailing slash is trimmed).
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Http`] if the underlying client cannot be built.
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RepositoryError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub(crate) fn items_url(&self, collection: &CollectionName) -> String {
        format!(
            "{}/{}/{}/items",
            self.base_url, CMS_COLLECTIONS_PATH, collection
        )
    }
}

#[async_trait]
impl ContentRepository for HttpContentRepository {
    async fn fetch_all(
        &self,
        collection: &CollectionName,
    ) -> Result<ItemsEnvelope, RepositoryError> {
        let url = self.items_url(collection);

        info!(url = %url, "fetching collection from CMS");
        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RepositoryError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let text = resp.text().await?;
        let envelope = ItemsEnvelope::from_json(&text)?;
        info!(collection = %collection, count = envelope.items.len(), "fetched collection");
        Ok(envelope)
    }
}
