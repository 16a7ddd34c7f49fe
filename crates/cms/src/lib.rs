//! CMS wire/boundary support for the Scamwatch catalogs.
//!
//! The hosted content-management backend exposes two collections:
//! - `scamtypes` ([`ScamTypes`] → [`ScamRecord`])
//! - `deceptivetactics` ([`DeceptiveTactics`] → [`TacticRecord`])
//!
//! This crate focuses on:
//! - the exact field names the CMS uses (`_id`, `scamName`, `visualExample`, ...)
//! - decoding the `{"items": [...]}` envelope returned by a fetch-all
//! - translation from wire structs into flat domain records
//!
//! It performs no I/O; fetching lives in `scamwatch-core`.

pub mod deceptive_tactics;
pub mod envelope;
pub mod scam_types;
mod timestamp;

// Re-export facades
pub use deceptive_tactics::DeceptiveTactics;
pub use scam_types::ScamTypes;

// Re-export public domain-level types
pub use deceptive_tactics::TacticRecord;
pub use envelope::{decode_items, ItemsEnvelope};
pub use scam_types::ScamRecord;

pub use scamwatch_types::{CollectionName, EntityId};

/// Errors returned by the `cms` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`CmsError`].
pub type CmsResult<T> = Result<T, CmsError>;

/// A record type backed by one CMS collection.
///
/// Implementors decode a single raw item from the collection into their domain shape.
pub trait CmsRecord: Sized {
    /// Default collection identifier in the CMS.
    const COLLECTION: &'static str;

    /// Decode one raw collection item.
    ///
    /// # Errors
    ///
    /// Returns [`CmsError`] if the item does not match the collection's wire schema or has
    /// no usable `_id`.
    fn from_item(item: serde_json::Value) -> CmsResult<Self>;
}

/// Deserialize `value` into `W`, reporting the failing field path on mismatch.
pub(crate) fn deserialize_wire<W>(collection: &str, value: serde_json::Value) -> CmsResult<W>
where
    W: serde::de::DeserializeOwned,
{
    serde_path_to_error::deserialize::<_, W>(value).map_err(|err| {
        let path = err.path().to_string();
        let source = err.into_inner();
        let path = if path.is_empty() || path == "." {
            "<root>"
        } else {
            path.as_str()
        };
        CmsError::Translation(format!("{collection} schema mismatch at {path}: {source}"))
    })
}

/// Parse the CMS `_id` into an [`EntityId`].
pub(crate) fn parse_id(collection: &str, raw: Option<String>) -> CmsResult<EntityId> {
    let raw = raw.ok_or_else(|| CmsError::InvalidInput(format!("{collection} item has no _id")))?;
    EntityId::new(&raw)
        .map_err(|e| CmsError::InvalidInput(format!("{collection} item has invalid _id: {e}")))
}
