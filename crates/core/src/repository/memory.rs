use super::ContentRepository;
use crate::RepositoryError;
use async_trait::async_trait;
use cms::ItemsEnvelope;
use scamwatch_types::CollectionName;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

/// In-process content repository.
///
/// Collections are registered up front; a collection can be marked as failing to exercise
/// the "snapshot fetch failed" path.
#[derive(Default)]
pub struct MemoryContentRepository {
    collections: HashMap<String, Vec<serde_json::Value>>,
    failing: HashSet<String>,
    fetch_calls: AtomicU64,
}

impl MemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(mut self, name: &str, items: Vec<serde_json::Value>) -> Self {
        self.collections.insert(name.to_string(), items);
        self
    }

    pub fn failing(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    /// Number of `fetch_all` calls served so far, failures included.
    pub fn fetch_calls(&self) -> u64 {
        self.fetch_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ContentRepository for MemoryContentRepository {
    async fn fetch_all(
        &self,
        collection: &CollectionName,
    ) -> Result<ItemsEnvelope, RepositoryError> {
        self.fetch_calls.fetch_add(1, Ordering::Relaxed);

        if self.failing.contains(collection.as_str()) {
            return Err(RepositoryError::Unavailable(collection.to_string()));
        }
        self.collections
            .get(collection.as_str())
            .map(|items| ItemsEnvelope {
                items: items.clone(),
            })
            .ok_or_else(|| RepositoryError::UnknownCollection(collection.to_string()))
    }
}
