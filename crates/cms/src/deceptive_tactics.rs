//! `deceptivetactics` collection: wire model and translation.

use crate::timestamp;
use crate::{deserialize_wire, parse_id, CmsRecord, CmsResult};
use chrono::{DateTime, Utc};
use scamwatch_types::EntityId;
use serde::Deserialize;

/// Domain-level carrier for one deceptive design tactic ("dark pattern").
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TacticRecord {
    pub id: EntityId,

    /// Display title (`tacticName` in the CMS).
    pub name: Option<String>,

    /// One-paragraph summary; the primary description for search and previews.
    pub short_description: Option<String>,

    pub detailed_explanation: Option<String>,

    pub visual_example_ref: Option<String>,

    pub category: Option<String>,

    pub characteristics: Option<String>,

    pub created_at: Option<DateTime<Utc>>,

    pub updated_at: Option<DateTime<Utc>>,
}

/// `deceptivetactics` collection operations.
pub struct DeceptiveTactics;

impl DeceptiveTactics {
    pub const COLLECTION: &'static str = "deceptivetactics";

    /// Parse one raw `deceptivetactics` item.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CmsError`] on a schema mismatch or a missing/blank `_id`.
    pub fn parse(item: serde_json::Value) -> CmsResult<TacticRecord> {
        let wire: DeceptiveTacticsWire = deserialize_wire(Self::COLLECTION, item)?;
        Ok(TacticRecord {
            id: parse_id(Self::COLLECTION, wire.id)?,
            name: wire.tactic_name,
            short_description: wire.short_description,
            detailed_explanation: wire.detailed_explanation,
            visual_example_ref: wire.visual_example,
            category: wire.category,
            characteristics: wire.characteristics,
            created_at: timestamp::to_utc(wire.created_date.as_ref()),
            updated_at: timestamp::to_utc(wire.updated_date.as_ref()),
        })
    }
}

impl CmsRecord for TacticRecord {
    const COLLECTION: &'static str = DeceptiveTactics::COLLECTION;

    fn from_item(item: serde_json::Value) -> CmsResult<Self> {
        DeceptiveTactics::parse(item)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
struct DeceptiveTacticsWire {
    #[serde(rename = "_id")]
    id: Option<String>,

    #[serde(rename = "_createdDate")]
    created_date: Option<serde_json::Value>,

    #[serde(rename = "_updatedDate")]
    updated_date: Option<serde_json::Value>,

    #[serde(rename = "tacticName")]
    tactic_name: Option<String>,

    #[serde(rename = "shortDescription")]
    short_description: Option<String>,

    #[serde(rename = "detailedExplanation")]
    detailed_explanation: Option<String>,

    #[serde(rename = "visualExample")]
    visual_example: Option<String>,

    category: Option<String>,

    characteristics: Option<String>,
}
