//! JSON response bodies.
//!
//! Both catalogs serialise through the same [`CatalogItem`] shape; fields that only one
//! catalog has are omitted for the other.

use chrono::{DateTime, Utc};
use cms::{ScamRecord, TacticRecord};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogItem {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Primary description: `description` for scams, `shortDescription` for tactics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characteristics: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevention_tips: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&ScamRecord> for CatalogItem {
    fn from(r: &ScamRecord) -> Self {
        Self {
            id: r.id.to_string(),
            name: r.name.clone(),
            category: r.category.clone(),
            description: r.description.clone(),
            characteristics: r.characteristics.clone(),
            visual_example: r.visual_example_ref.clone(),
            prevention_tips: r.prevention_tips.clone(),
            detailed_explanation: None,
            updated_at: r.updated_at.or(r.created_at),
        }
    }
}

impl From<&TacticRecord> for CatalogItem {
    fn from(r: &TacticRecord) -> Self {
        Self {
            id: r.id.to_string(),
            name: r.name.clone(),
            category: r.category.clone(),
            description: r.short_description.clone(),
            characteristics: r.characteristics.clone(),
            visual_example: r.visual_example_ref.clone(),
            prevention_tips: None,
            detailed_explanation: r.detailed_explanation.clone(),
            updated_at: r.updated_at.or(r.created_at),
        }
    }
}

/// Filtered list of one catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogListRes {
    /// Catalog slug (`scams` or `dark-patterns`).
    pub catalog: String,
    /// `false` when the content repository could not be read; `items` is then empty.
    pub loaded: bool,
    pub query: String,
    pub category: String,
    /// Category options across the whole snapshot, excluding the implicit `all`.
    pub categories: Vec<String>,
    /// Number of visible items.
    pub total: usize,
    pub items: Vec<CatalogItem>,
}
