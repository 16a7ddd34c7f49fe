//! Catalog list/filter/detail logic.
//!
//! Both catalogs share one derivation over an in-memory snapshot:
//!
//! 1. start from the full snapshot
//! 2. a non-empty query keeps entities whose name, primary description or characteristics
//!    contain the query, case-insensitively (absent fields never match)
//! 3. a category other than `"all"` keeps entities whose category equals it exactly
//! 4. snapshot order is preserved
//!
//! Category options are a projection over the snapshot, never a fixed enumeration.

mod view;

pub use view::{CatalogView, LoadPhase};

use crate::constants::{ALL_CATEGORIES, PREVIEW_CHAR_BUDGET, PREVIEW_ELLIPSIS};
use cms::{CmsRecord, DeceptiveTactics, ScamRecord, ScamTypes, TacticRecord};
use scamwatch_types::EntityId;
use std::collections::HashSet;

/// The two content catalogs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Scams,
    DarkPatterns,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 2] = [CatalogKind::Scams, CatalogKind::DarkPatterns];

    /// Route segment for the catalog (`/scams`, `/dark-patterns`).
    pub fn slug(self) -> &'static str {
        match self {
            CatalogKind::Scams => "scams",
            CatalogKind::DarkPatterns => "dark-patterns",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    pub fn default_collection(self) -> &'static str {
        match self {
            CatalogKind::Scams => ScamTypes::COLLECTION,
            CatalogKind::DarkPatterns => DeceptiveTactics::COLLECTION,
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            CatalogKind::Scams => "Scam Types",
            CatalogKind::DarkPatterns => "Dark Patterns",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            CatalogKind::Scams => "Scam Types Database",
            CatalogKind::DarkPatterns => "Dark Patterns Library",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            CatalogKind::Scams => "Learn to identify and protect yourself from common online scams",
            CatalogKind::DarkPatterns => {
                "Recognise the deceptive design tactics used to manipulate your choices"
            }
        }
    }

    /// Singular noun used in detail-page links.
    pub fn noun(self) -> &'static str {
        match self {
            CatalogKind::Scams => "scam",
            CatalogKind::DarkPatterns => "tactic",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            CatalogKind::Scams => "No scams found",
            CatalogKind::DarkPatterns => "No tactics found",
        }
    }

    pub fn loading_message(self) -> &'static str {
        match self {
            CatalogKind::Scams => "Loading scam database...",
            CatalogKind::DarkPatterns => "Loading dark patterns...",
        }
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Identifier/display mapping a catalog needs from its entity type.
pub trait CatalogEntity: CmsRecord + Send + Sync + 'static {
    /// Catalog this entity type is listed in.
    const KIND: CatalogKind;

    fn id(&self) -> &EntityId;
    fn name(&self) -> Option<&str>;
    /// Description searched and previewed on list cards.
    fn primary_description(&self) -> Option<&str>;
    fn characteristics(&self) -> Option<&str>;
    fn category(&self) -> Option<&str>;
    fn visual_example_ref(&self) -> Option<&str>;
    /// Narrative sections of the detail view, in display order. Blank fields are omitted.
    fn detail_sections(&self) -> Vec<(&'static str, &str)>;
}

fn present_sections<'a>(
    sections: [(&'static str, Option<&'a str>); 3],
) -> Vec<(&'static str, &'a str)> {
    sections
        .into_iter()
        .filter_map(|(heading, text)| {
            text.filter(|t| !t.trim().is_empty()).map(|t| (heading, t))
        })
        .collect()
}

impl CatalogEntity for ScamRecord {
    const KIND: CatalogKind = CatalogKind::Scams;

    fn id(&self) -> &EntityId {
        &self.id
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn primary_description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    fn characteristics(&self) -> Option<&str> {
        self.characteristics.as_deref()
    }
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
    fn visual_example_ref(&self) -> Option<&str> {
        self.visual_example_ref.as_deref()
    }
    fn detail_sections(&self) -> Vec<(&'static str, &str)> {
        present_sections([
            ("Description", self.description.as_deref()),
            ("Characteristics", self.characteristics.as_deref()),
            ("Prevention Tips", self.prevention_tips.as_deref()),
        ])
    }
}

impl CatalogEntity for TacticRecord {
    const KIND: CatalogKind = CatalogKind::DarkPatterns;

    fn id(&self) -> &EntityId {
        &self.id
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn primary_description(&self) -> Option<&str> {
        self.short_description.as_deref()
    }
    fn characteristics(&self) -> Option<&str> {
        self.characteristics.as_deref()
    }
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
    fn visual_example_ref(&self) -> Option<&str> {
        self.visual_example_ref.as_deref()
    }
    fn detail_sections(&self) -> Vec<(&'static str, &str)> {
        present_sections([
            ("Overview", self.short_description.as_deref()),
            ("Detailed Explanation", self.detailed_explanation.as_deref()),
            ("Characteristics", self.characteristics.as_deref()),
        ])
    }
}

/// Active category restriction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Exact(String),
}

impl CategoryFilter {
    /// `"all"` maps to [`CategoryFilter::All`]; anything else is an exact match.
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Exact(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Exact(value) => value,
        }
    }

    fn admits(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Exact(value) => category == Some(value.as_str()),
        }
    }
}

/// Whether `entity` matches an already-lowercased query.
fn matches_query<T: CatalogEntity>(entity: &T, needle: &str) -> bool {
    [
        entity.name(),
        entity.primary_description(),
        entity.characteristics(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Positions of the visible entities within `snapshot`, ascending.
pub(crate) fn visible_indices<T: CatalogEntity>(
    snapshot: &[T],
    query: &str,
    category: &CategoryFilter,
) -> Vec<usize> {
    let needle = query.to_lowercase();
    snapshot
        .iter()
        .enumerate()
        .filter(|(_, entity)| query.is_empty() || matches_query(*entity, &needle))
        .filter(|(_, entity)| category.admits(entity.category()))
        .map(|(index, _)| index)
        .collect()
}

/// Derive the visible subset of `snapshot`.
pub fn filter_entities<'a, T: CatalogEntity>(
    snapshot: &'a [T],
    query: &str,
    category: &CategoryFilter,
) -> Vec<&'a T> {
    visible_indices(snapshot, query, category)
        .into_iter()
        .map(|index| &snapshot[index])
        .collect()
}

/// Distinct non-empty categories in first-seen order. `"all"` is implicit and not included.
pub fn category_options<T: CatalogEntity>(snapshot: &[T]) -> Vec<&str> {
    let mut seen = HashSet::new();
    snapshot
        .iter()
        .filter_map(|entity| entity.category())
        .filter(|category| !category.is_empty())
        .filter(|category| seen.insert(*category))
        .collect()
}

/// Resolve one entity by identifier.
pub fn select_by_id<'a, T: CatalogEntity>(snapshot: &'a [T], id: &str) -> Option<&'a T> {
    snapshot.iter().find(|entity| entity.id() == id)
}

/// List-card preview of a description: at most 150 characters, then `...`.
pub fn preview(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };
    match text.char_indices().nth(PREVIEW_CHAR_BUDGET) {
        Some((cut, _)) => format!("{}{}", &text[..cut], PREVIEW_ELLIPSIS),
        None => text.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn scam(id: &str, name: &str, description: &str, category: &str) -> ScamRecord {
        ScamTypes::parse(json!({
            "_id": id,
            "scamName": name,
            "description": description,
            "category": category,
        }))
        .expect("valid scam")
    }

    pub(crate) fn scenario() -> Vec<ScamRecord> {
        vec![
            scam("1", "Phishing", "Fake emails", "Email"),
            scam("2", "Romance Scam", "Fake relationship", "Social"),
        ]
    }

    fn ids<T: CatalogEntity>(items: &[&T]) -> Vec<String> {
        items.iter().map(|e| e.id().to_string()).collect()
    }

    #[test]
    fn query_matches_name_description_or_characteristics() {
        let mut snapshot = scenario();
        snapshot.push(ScamTypes::parse(json!({
            "_id": "3",
            "scamName": "Tech support",
            "characteristics": "Pop-up claiming FAKE virus"
        }))
        .unwrap());

        let visible = filter_entities(&snapshot, "fake", &CategoryFilter::All);
        assert_eq!(ids(&visible), vec!["1", "2", "3"]);

        let visible = filter_entities(&snapshot, "ROMANCE", &CategoryFilter::All);
        assert_eq!(ids(&visible), vec!["2"]);
    }

    #[test]
    fn every_match_contains_query() {
        let snapshot = scenario();
        for query in ["fake", "EMAIL", "ship", "zzz", "a"] {
            let needle = query.to_lowercase();
            for entity in filter_entities(&snapshot, query, &CategoryFilter::All) {
                assert!(matches_query(entity, &needle), "{query} vs {:?}", entity.id);
            }
        }
    }

    #[test]
    fn empty_query_and_all_is_identity() {
        let snapshot = scenario();
        let visible = filter_entities(&snapshot, "", &CategoryFilter::All);
        let expected: Vec<&ScamRecord> = snapshot.iter().collect();
        assert_eq!(visible, expected);
    }

    #[test]
    fn category_is_exact_and_case_sensitive() {
        let snapshot = scenario();
        let email = CategoryFilter::parse("Email");
        assert_eq!(ids(&filter_entities(&snapshot, "fake", &email)), vec!["1"]);
        assert!(filter_entities(&snapshot, "", &CategoryFilter::parse("email")).is_empty());
    }

    #[test]
    fn absent_fields_never_match() {
        let snapshot = vec![ScamTypes::parse(json!({"_id": "x"})).unwrap()];
        assert!(filter_entities(&snapshot, "x", &CategoryFilter::All).is_empty());
        assert!(filter_entities(&snapshot, "", &CategoryFilter::parse("Email")).is_empty());
        assert_eq!(filter_entities(&snapshot, "", &CategoryFilter::All).len(), 1);
    }

    #[test]
    fn category_options_are_distinct_and_non_empty() {
        let mut snapshot = scenario();
        snapshot.push(scam("3", "Spoofing", "", "Email"));
        snapshot.push(scam("4", "Blank", "", ""));
        snapshot.push(ScamTypes::parse(json!({"_id": "5"})).unwrap());

        assert_eq!(category_options(&snapshot), vec!["Email", "Social"]);
        assert!(category_options::<ScamRecord>(&[]).is_empty());
    }

    #[test]
    fn select_by_id_finds_unique_member() {
        let snapshot = scenario();
        let found = select_by_id(&snapshot, "2").expect("romance scam");
        assert_eq!(found.name.as_deref(), Some("Romance Scam"));
        assert!(select_by_id(&snapshot, "9").is_none());
        assert!(select_by_id::<ScamRecord>(&[], "1").is_none());
    }

    #[test]
    fn preview_truncates_at_budget() {
        let long = "é".repeat(200);
        let cut = preview(Some(&long));
        assert_eq!(cut.chars().count(), PREVIEW_CHAR_BUDGET + PREVIEW_ELLIPSIS.len());
        assert!(cut.ends_with("..."));

        let exact = "a".repeat(PREVIEW_CHAR_BUDGET);
        assert_eq!(preview(Some(&exact)), exact);
        assert_eq!(preview(None), "");
    }

    #[test]
    fn catalog_kind_slugs_round_trip() {
        for kind in CatalogKind::ALL {
            assert_eq!(CatalogKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(CatalogKind::from_slug("tactics"), None);
    }

    #[test]
    fn detail_sections_skip_blank_fields() {
        let tactic = DeceptiveTactics::parse(json!({
            "_id": "t1",
            "tacticName": "Confirmshaming",
            "shortDescription": "Guilt-tripping",
            "detailedExplanation": "   ",
            "characteristics": "Loaded decline wording"
        }))
        .unwrap();
        let headings: Vec<&str> = tactic.detail_sections().into_iter().map(|(h, _)| h).collect();
        assert_eq!(headings, vec!["Overview", "Characteristics"]);

        let headings: Vec<&str> = scenario()[0]
            .detail_sections()
            .into_iter()
            .map(|(h, _)| h)
            .collect();
        assert_eq!(headings, vec!["Description"]);
    }

    #[test]
    fn select_by_id_compares_raw_identifiers() {
        let snapshot = vec![
            scam(" 7 ", "Padded", "", "Email"),
            scam("7", "Plain", "", "Email"),
        ];
        let found = select_by_id(&snapshot, "7").expect("exact match");
        assert_eq!(found.name.as_deref(), Some("Plain"));
        assert_eq!(select_by_id(&snapshot, " 7 ").map(|s| s.id.as_str()), Some(" 7 "));
    }
}
