//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the catalog
//! service. Request handling never reads environment variables; the helpers below take
//! the raw optional values so binaries and tests can feed them from anywhere.

use crate::catalog::CatalogKind;
use crate::constants::{DEFAULT_CMS_TIMEOUT_SECS, DEFAULT_FIXTURE_DIR};
use crate::{CatalogError, CatalogResult};
use scamwatch_types::CollectionName;
use std::path::PathBuf;
use std::time::Duration;

/// Where catalog content is fetched from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentSource {
    /// Hosted CMS reachable over HTTP.
    Http {
        base_url: String,
        api_key: Option<String>,
        timeout: Duration,
    },
    /// Local directory of `<collection>.json` / `<collection>.yaml` files.
    Fixtures { dir: PathBuf },
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    content_source: ContentSource,
    scams_collection: CollectionName,
    tactics_collection: CollectionName,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidInput`] if both catalogs point at the same collection.
    pub fn new(
        content_source: ContentSource,
        scams_collection: CollectionName,
        tactics_collection: CollectionName,
    ) -> CatalogResult<Self> {
        if scams_collection == tactics_collection {
            return Err(CatalogError::InvalidInput(format!(
                "scam and tactic catalogs cannot share the collection {scams_collection}"
            )));
        }

        Ok(Self {
            content_source,
            scams_collection,
            tactics_collection,
        })
    }

    /// Configuration with the default collection names.
    pub fn with_source(content_source: ContentSource) -> CatalogResult<Self> {
        Self::new(
            content_source,
            collection_from_env_value(None, CatalogKind::Scams)?,
            collection_from_env_value(None, CatalogKind::DarkPatterns)?,
        )
    }

    /// Resolve configuration from the process environment.
    ///
    /// Intended to be called once from a binary's `main`.
    ///
    /// # Environment Variables
    /// - `CMS_BASE_URL`, `CMS_API_KEY`, `CMS_TIMEOUT_SECS`: hosted CMS access
    /// - `CMS_FIXTURE_DIR`: read collections from local files instead
    /// - `CMS_SCAMS_COLLECTION`, `CMS_TACTICS_COLLECTION`: collection name overrides
    pub fn from_env() -> CatalogResult<Self> {
        let var = |name: &str| std::env::var(name).ok();
        Self::new(
            content_source_from_env_values(
                var("CMS_BASE_URL"),
                var("CMS_API_KEY"),
                var("CMS_FIXTURE_DIR"),
                var("CMS_TIMEOUT_SECS"),
            )?,
            collection_from_env_value(var("CMS_SCAMS_COLLECTION"), CatalogKind::Scams)?,
            collection_from_env_value(var("CMS_TACTICS_COLLECTION"), CatalogKind::DarkPatterns)?,
        )
    }

    pub fn content_source(&self) -> &ContentSource {
        &self.content_source
    }

    /// Collection backing the given catalog.
    pub fn collection(&self, kind: CatalogKind) -> &CollectionName {
        match kind {
            CatalogKind::Scams => &self.scams_collection,
            CatalogKind::DarkPatterns => &self.tactics_collection,
        }
    }
}

/// Resolve the content source from optional raw values.
///
/// A fixture directory wins over a CMS URL when both are given. When neither is given the
/// source falls back to the `content/` fixture directory. Blank values count as unset.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidInput`] if the base URL is not an absolute `http(s)` URL
/// or the timeout is not a positive whole number of seconds.
pub fn content_source_from_env_values(
    base_url: Option<String>,
    api_key: Option<String>,
    fixture_dir: Option<String>,
    timeout_secs: Option<String>,
) -> CatalogResult<ContentSource> {
    let non_blank = |v: Option<String>| {
        v.map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    let base_url = non_blank(base_url);
    let fixture_dir = non_blank(fixture_dir);

    if let Some(dir) = fixture_dir {
        if base_url.is_some() {
            tracing::info!("both CMS_FIXTURE_DIR and CMS_BASE_URL are set; using fixtures");
        }
        return Ok(ContentSource::Fixtures {
            dir: PathBuf::from(dir),
        });
    }

    let Some(base_url) = base_url else {
        return Ok(ContentSource::Fixtures {
            dir: PathBuf::from(DEFAULT_FIXTURE_DIR),
        });
    };

    let parsed = reqwest::Url::parse(&base_url)
        .map_err(|e| CatalogError::InvalidInput(format!("invalid CMS base URL {base_url}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(CatalogError::InvalidInput(format!(
            "CMS base URL must use http or https, got {}",
            parsed.scheme()
        )));
    }

    let timeout = match non_blank(timeout_secs) {
        Some(raw) => match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
                return Err(CatalogError::InvalidInput(format!(
                    "CMS timeout must be a positive number of seconds, got {raw}"
                )))
            }
        },
        None => Duration::from_secs(DEFAULT_CMS_TIMEOUT_SECS),
    };

    Ok(ContentSource::Http {
        base_url: base_url.trim_end_matches('/').to_string(),
        api_key: non_blank(api_key),
        timeout,
    })
}

/// Parse a collection name override, falling back to the catalog's default collection.
///
/// # Errors
///
/// Returns [`CatalogError::Text`] if the override is not a valid collection name.
pub fn collection_from_env_value(
    value: Option<String>,
    kind: CatalogKind,
) -> CatalogResult<CollectionName> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let name = value.as_deref().unwrap_or(kind.default_collection());
    Ok(CollectionName::new(name)?)
}
