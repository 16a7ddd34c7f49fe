//! The `{"items": [...]}` envelope returned by a CMS fetch-all.

use crate::{CmsRecord, CmsResult};
use serde::{Deserialize, Serialize};

/// Raw fetch-all response. Items are kept as JSON values so that one malformed item does
/// not poison the whole collection.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ItemsEnvelope {
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}

impl ItemsEnvelope {
    /// Parse an envelope from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CmsError::InvalidJson`] if the text is not a JSON object with an
    /// optional `items` array.
    pub fn from_json(text: &str) -> CmsResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Decode raw items into records, preserving order.
///
/// Items that fail to decode are skipped with a warning; the rest of the collection is
/// still returned.
pub fn decode_items<T: CmsRecord>(items: Vec<serde_json::Value>) -> Vec<T> {
    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match T::from_item(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(
                    collection = T::COLLECTION,
                    index,
                    "skipping malformed item: {}",
                    e
                );
                None
            }
        })
        .collect();

    if records.len() != total {
        tracing::warn!(
            collection = T::COLLECTION,
            kept = records.len(),
            total,
            "some items were skipped"
        );
    }
    records
}
