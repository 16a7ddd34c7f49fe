//! Per-visit catalog view state.
//!
//! A `CatalogView` is created for one page visit, loaded once, and dropped when the visit
//! ends. Nothing is shared between visits.

use super::{category_options, visible_indices, CatalogEntity, CategoryFilter};
use crate::repository::ContentRepository;
use cms::decode_items;
use scamwatch_types::CollectionName;

/// Where the view is in its single fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    /// Fetch not finished; show a loading indicator and ignore filter input.
    Loading,
    /// Snapshot holds the fetched collection.
    Ready,
    /// The fetch failed; the snapshot is empty and the view renders zero results.
    Failed,
}

/// List/detail state for one catalog.
///
/// The visible subset is re-derived whenever the query, category or snapshot changes, and
/// the requested selection is re-resolved whenever the snapshot changes.
#[derive(Debug)]
pub struct CatalogView<T> {
    collection: CollectionName,
    phase: LoadPhase,
    snapshot: Vec<T>,
    query: String,
    category: CategoryFilter,
    visible: Vec<usize>,
    requested_id: Option<String>,
    selected: Option<usize>,
}

impl<T: CatalogEntity> CatalogView<T> {
    pub fn new(collection: CollectionName) -> Self {
        Self {
            collection,
            phase: LoadPhase::Loading,
            snapshot: Vec::new(),
            query: String::new(),
            category: CategoryFilter::All,
            visible: Vec::new(),
            requested_id: None,
            selected: None,
        }
    }

    /// Fetch the full collection once.
    ///
    /// A failed fetch is logged and leaves the snapshot empty; it never propagates. Calling
    /// `load` again after the first fetch has settled does nothing.
    pub async fn load(&mut self, repository: &dyn ContentRepository) {
        if self.phase != LoadPhase::Loading {
            tracing::debug!(collection = %self.collection, "catalog already loaded");
            return;
        }

        match repository.fetch_all(&self.collection).await {
            Ok(envelope) => {
                self.snapshot = decode_items(envelope.items);
                self.phase = LoadPhase::Ready;
                tracing::info!(
                    collection = %self.collection,
                    count = self.snapshot.len(),
                    "catalog loaded"
                );
            }
            Err(e) => {
                tracing::error!("Error loading {}: {}", self.collection, e);
                self.snapshot.clear();
                self.phase = LoadPhase::Failed;
            }
        }

        self.derive();
        self.resolve_selection();
    }

    /// Set the free-text query. Ignored while loading.
    pub fn set_query(&mut self, text: impl Into<String>) {
        if self.phase == LoadPhase::Loading {
            tracing::debug!(collection = %self.collection, "query ignored while loading");
            return;
        }
        self.query = text.into();
        self.derive();
    }

    /// Set the category filter (`"all"` clears it). Ignored while loading.
    pub fn set_category(&mut self, value: &str) {
        if self.phase == LoadPhase::Loading {
            tracing::debug!(collection = %self.collection, "category ignored while loading");
            return;
        }
        self.category = CategoryFilter::parse(value);
        self.derive();
    }

    /// Select an entity by identifier, or clear the selection with `None`.
    ///
    /// The request is remembered: an id given before the snapshot arrives is resolved when
    /// it does. An id that matches nothing leaves the selection empty (list view).
    pub fn select_by_id(&mut self, id: Option<&str>) {
        self.requested_id = id.map(str::to_string);
        self.resolve_selection();
    }

    fn derive(&mut self) {
        self.visible = visible_indices(&self.snapshot, &self.query, &self.category);
    }

    fn resolve_selection(&mut self) {
        self.selected = match (&self.requested_id, self.snapshot.is_empty()) {
            (Some(id), false) => self
                .snapshot
                .iter()
                .position(|entity| entity.id() == id.as_str()),
            _ => None,
        };
    }

    pub fn collection(&self) -> &CollectionName {
        &self.collection
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn snapshot(&self) -> &[T] {
        &self.snapshot
    }

    /// Visible subset in snapshot order.
    pub fn visible(&self) -> Vec<&T> {
        self.visible.iter().map(|&i| &self.snapshot[i]).collect()
    }

    pub fn category_options(&self) -> Vec<&str> {
        category_options(&self.snapshot)
    }

    /// Selected entity for the detail view; `None` means the list view is shown.
    pub fn selection(&self) -> Option<&T> {
        self.selected.map(|i| &self.snapshot[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::scenario;
    use crate::repository::MemoryContentRepository;
    use cms::{ScamRecord, ScamTypes};
    use serde_json::json;

    fn scamtypes() -> CollectionName {
        CollectionName::new(ScamTypes::COLLECTION).unwrap()
    }

    fn scenario_repo() -> MemoryContentRepository {
        MemoryContentRepository::new().with_collection(
            ScamTypes::COLLECTION,
            vec![
                json!({"_id": "1", "scamName": "Phishing", "description": "Fake emails", "category": "Email"}),
                json!({"_id": "2", "scamName": "Romance Scam", "description": "Fake relationship", "category": "Social"}),
            ],
        )
    }

    fn ids(view: &CatalogView<ScamRecord>) -> Vec<&str> {
        view.visible().into_iter().map(|e| e.id.as_str()).collect()
    }

    #[tokio::test]
    async fn scenario_query_category_and_selection() {
        let repo = scenario_repo();
        let mut view = CatalogView::<ScamRecord>::new(scamtypes());
        view.load(&repo).await;

        assert_eq!(view.phase(), LoadPhase::Ready);
        assert_eq!(view.snapshot(), scenario().as_slice());

        view.set_query("fake");
        assert_eq!(ids(&view), vec!["1", "2"]);

        view.set_category("Email");
        assert_eq!(ids(&view), vec!["1"]);

        view.select_by_id(Some("2"));
        assert_eq!(
            view.selection().and_then(|s| s.name.as_deref()),
            Some("Romance Scam")
        );

        view.select_by_id(Some("9"));
        assert!(view.selection().is_none());
    }

    #[tokio::test]
    async fn empty_snapshot_yields_nothing() {
        let repo = MemoryContentRepository::new().with_collection(ScamTypes::COLLECTION, vec![]);
        let mut view = CatalogView::<ScamRecord>::new(scamtypes());
        view.load(&repo).await;

        assert_eq!(view.phase(), LoadPhase::Ready);
        assert!(view.visible().is_empty());
        assert!(view.category_options().is_empty());
        view.select_by_id(Some("1"));
        assert!(view.selection().is_none());
    }

    #[tokio::test]
    async fn failed_fetch_renders_empty_list() {
        let repo = scenario_repo().failing(ScamTypes::COLLECTION);
        let mut view = CatalogView::<ScamRecord>::new(scamtypes());
        view.select_by_id(Some("1"));
        view.load(&repo).await;

        assert_eq!(view.phase(), LoadPhase::Failed);
        assert!(!view.is_loading());
        assert!(view.snapshot().is_empty());
        assert!(view.visible().is_empty());
        assert!(view.selection().is_none());
    }

    #[tokio::test]
    async fn selection_requested_before_load_resolves_after() {
        let repo = scenario_repo();
        let mut view = CatalogView::<ScamRecord>::new(scamtypes());

        view.select_by_id(Some("1"));
        assert!(view.selection().is_none(), "nothing loaded yet");

        view.load(&repo).await;
        assert_eq!(view.selection().map(|s| s.id.as_str()), Some("1"));

        view.select_by_id(None);
        assert!(view.selection().is_none());
    }

    #[tokio::test]
    async fn filters_are_ignored_while_loading_and_load_runs_once() {
        let repo = scenario_repo();
        let mut view = CatalogView::<ScamRecord>::new(scamtypes());

        view.set_query("romance");
        view.set_category("Social");
        assert!(view.visible().is_empty());

        view.load(&repo).await;
        view.load(&repo).await;
        assert_eq!(repo.fetch_calls(), 1);
        assert_eq!(view.query(), "");
        assert_eq!(view.category(), &CategoryFilter::All);
        assert_eq!(ids(&view), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn all_sentinel_clears_category() {
        let repo = scenario_repo();
        let mut view = CatalogView::<ScamRecord>::new(scamtypes());
        view.load(&repo).await;

        view.set_category("Social");
        assert_eq!(ids(&view), vec!["2"]);
        view.set_category("all");
        assert_eq!(ids(&view), vec!["1", "2"]);
    }
}
