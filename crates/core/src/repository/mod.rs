//! Content repository boundary.
//!
//! The CMS is an external collaborator that offers one operation per collection: fetch
//! everything. No filtering or pagination is pushed across this boundary.
//!
//! Backends:
//! - [`HttpContentRepository`]: the hosted CMS over HTTP
//! - [`FixtureContentRepository`]: JSON/YAML files on disk
//! - [`MemoryContentRepository`]: in-process collections for tests and demos

mod fixtures;
mod http;
mod memory;

pub use fixtures::FixtureContentRepository;
pub use http::HttpContentRepository;
pub use memory::MemoryContentRepository;

use crate::config::ContentSource;
use crate::RepositoryError;
use async_trait::async_trait;
use cms::ItemsEnvelope;
use scamwatch_types::CollectionName;
use std::sync::Arc;

#[async_trait]
pub trait ContentRepository: Send + Sync + 'static {
    /// Fetch every item of `collection`.
    async fn fetch_all(&self, collection: &CollectionName)
        -> Result<ItemsEnvelope, RepositoryError>;
}

/// Build the repository backend for a configured content source.
///
/// # Errors
///
/// Returns [`RepositoryError::Http`] if the HTTP client cannot be constructed.
pub fn build_repository(
    source: &ContentSource,
) -> Result<Arc<dyn ContentRepository>, RepositoryError> {
    match source {
        ContentSource::Http {
            base_url,
            api_key,
            timeout,
        } => {
            tracing::info!(base_url = %base_url, "using hosted CMS");
            Ok(Arc::new(HttpContentRepository::new(
                base_url.clone(),
                api_key.clone(),
                *timeout,
            )?))
        }
        ContentSource::Fixtures { dir } => {
            tracing::info!(dir = %dir.display(), "using fixture content");
            Ok(Arc::new(FixtureContentRepository::new(dir.clone())))
        }
    }
}
