//! `scamtypes` collection: wire model and translation.
//!
//! Every field except `_id` is optional in the CMS, including the display name. Absent and
//! empty values are kept as `None`/empty strings; callers decide how to display them.

use crate::timestamp;
use crate::{deserialize_wire, parse_id, CmsRecord, CmsResult};
use chrono::{DateTime, Utc};
use scamwatch_types::EntityId;
use serde::Deserialize;

/// Domain-level carrier for one scam type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScamRecord {
    /// Identifier assigned by the CMS.
    pub id: EntityId,

    /// Display title.
    pub name: Option<String>,

    /// Free-text description; the primary description for search and previews.
    pub description: Option<String>,

    /// Reference (usually a URL) to an illustrative image.
    pub visual_example_ref: Option<String>,

    pub category: Option<String>,

    pub characteristics: Option<String>,

    pub prevention_tips: Option<String>,

    pub created_at: Option<DateTime<Utc>>,

    pub updated_at: Option<DateTime<Utc>>,
}

/// `scamtypes` collection operations.
pub struct ScamTypes;

impl ScamTypes {
    pub const COLLECTION: &'static str = "scamtypes";

    /// Parse one raw `scamtypes` item.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CmsError`] if a field has an unexpected type or `_id` is missing or
    /// blank.
    pub fn parse(item: serde_json::Value) -> CmsResult<ScamRecord> {
        let wire: ScamTypesWire = deserialize_wire(Self::COLLECTION, item)?;
        wire_to_domain(wire)
    }
}

impl CmsRecord for ScamRecord {
    const COLLECTION: &'static str = ScamTypes::COLLECTION;

    fn from_item(item: serde_json::Value) -> CmsResult<Self> {
        ScamTypes::parse(item)
    }
}

/// Wire representation of a `scamtypes` item.
///
/// Unknown keys are tolerated: the CMS adds system fields (`_owner`, ...) that are not part
/// of the collection schema.
#[derive(Clone, Debug, Deserialize, PartialEq)]
struct ScamTypesWire {
    #[serde(rename = "_id")]
    id: Option<String>,

    #[serde(rename = "_createdDate")]
    created_date: Option<serde_json::Value>,

    #[serde(rename = "_updatedDate")]
    updated_date: Option<serde_json::Value>,

    #[serde(rename = "scamName")]
    scam_name: Option<String>,

    description: Option<String>,

    #[serde(rename = "visualExample")]
    visual_example: Option<String>,

    category: Option<String>,

    characteristics: Option<String>,

    #[serde(rename = "preventionTips")]
    prevention_tips: Option<String>,
}

fn wire_to_domain(wire: ScamTypesWire) -> CmsResult<ScamRecord> {
    Ok(ScamRecord {
        id: parse_id(ScamTypes::COLLECTION, wire.id)?,
        created_at: timestamp::to_utc(wire.created_date.as_ref()),
        updated_at: timestamp::to_utc(wire.updated_date.as_ref()),
        name: wire.scam_name,
        description: wire.description,
        visual_example_ref: wire.visual_example,
        category: wire.category,
        characteristics: wire.characteristics,
        prevention_tips: wire.prevention_tips,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CmsError;
    use serde_json::json;

    #[test]
    fn parses_cms_field_names() {
        let item = json!({
            "_id": "1",
            "_owner": "ignored",
            "_createdDate": {"$date": "2024-02-10T09:30:00Z"},
            "scamName": "Phishing",
            "description": "Fake emails",
            "visualExample": "https://static.example.com/phishing.png",
            "category": "Email",
            "characteristics": "Urgent tone",
            "preventionTips": "Check the sender"
        });

        let record = ScamTypes::parse(item).expect("parse scam");
        assert_eq!(record.id.as_str(), "1");
        assert_eq!(record.name.as_deref(), Some("Phishing"));
        assert_eq!(record.description.as_deref(), Some("Fake emails"));
        assert_eq!(
            record.visual_example_ref.as_deref(),
            Some("https://static.example.com/phishing.png")
        );
        assert_eq!(record.category.as_deref(), Some("Email"));
        assert_eq!(record.prevention_tips.as_deref(), Some("Check the sender"));
        assert!(record.created_at.is_some());
        assert_eq!(record.updated_at, None);
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let record = ScamTypes::parse(json!({"_id": "abc"})).expect("parse minimal");
        assert_eq!(record.name, None);
        assert_eq!(record.description, None);
        assert_eq!(record.category, None);
    }

    #[test]
    fn missing_id_is_rejected() {
        let err = ScamTypes::parse(json!({"scamName": "No id"})).expect_err("no _id");
        assert!(matches!(err, CmsError::InvalidInput(_)));
    }

    #[test]
    fn wrong_type_reports_field_path() {
        let err = ScamTypes::parse(json!({"_id": "1", "category": 7})).expect_err("bad type");
        match err {
            CmsError::Translation(msg) => assert!(msg.contains("category"), "{msg}"),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }
}
