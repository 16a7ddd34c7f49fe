//! File-backed content repository.
//!
//! Each collection lives in `<dir>/<collection>.json` using the same `{"items": [...]}`
//! envelope the CMS returns. Hand-written content may use `<collection>.yaml` (or `.yml`)
//! instead; JSON is tried first.

use super::ContentRepository;
use crate::RepositoryError;
use async_trait::async_trait;
use cms::ItemsEnvelope;
use scamwatch_types::CollectionName;
use std::path::{Path, PathBuf};

pub struct FixtureContentRepository {
    dir: PathBuf,
}

impl FixtureContentRepository {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read(path: &Path) -> Result<Option<String>, RepositoryError> {
        match tokio::fs::read_to_string(path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(RepositoryError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

#[async_trait]
impl ContentRepository for FixtureContentRepository {
    async fn fetch_all(
        &self,
        collection: &CollectionName,
    ) -> Result<ItemsEnvelope, RepositoryError> {
        let json_path = self.dir.join(format!("{collection}.json"));
        if let Some(text) = Self::read(&json_path).await? {
            return Ok(ItemsEnvelope::from_json(&text)?);
        }

        for ext in ["yaml", "yml"] {
            let yaml_path = self.dir.join(format!("{collection}.{ext}"));
            if let Some(text) = Self::read(&yaml_path).await? {
                return Ok(serde_yaml::from_str(&text)?);
            }
        }

        Err(RepositoryError::Io {
            path: json_path,
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no JSON or YAML fixture for collection",
            ),
        })
    }
}
