use crate::catalog::{CatalogEntity, CatalogView};
use crate::config::CoreConfig;
use crate::repository::{build_repository, ContentRepository};
use crate::CatalogResult;
use std::sync::Arc;

/// Entry point for page visits.
///
/// Holds the resolved configuration and the repository backend. Each call to
/// [`CatalogService::visit`] builds fresh view state; the service itself is immutable and
/// cheap to clone into request handlers.
#[derive(Clone)]
pub struct CatalogService {
    cfg: Arc<CoreConfig>,
    repository: Arc<dyn ContentRepository>,
}

impl CatalogService {
    pub fn new(cfg: Arc<CoreConfig>, repository: Arc<dyn ContentRepository>) -> Self {
        Self { cfg, repository }
    }

    /// Build the service with the repository backend named by `cfg`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CatalogError::Repository`] if the backend cannot be constructed.
    pub fn from_config(cfg: Arc<CoreConfig>) -> CatalogResult<Self> {
        let repository = build_repository(cfg.content_source())?;
        Ok(Self::new(cfg, repository))
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    /// Start a page visit for catalog `T`: build the view and load its snapshot once.
    ///
    /// The returned view is always usable; a failed fetch shows up as
    /// [`crate::catalog::LoadPhase::Failed`] with an empty snapshot.
    pub async fn visit<T: CatalogEntity>(&self) -> CatalogView<T> {
        let collection = self.cfg.collection(T::KIND).clone();
        let mut view = CatalogView::new(collection);
        view.load(self.repository.as_ref()).await;
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogKind, LoadPhase};
    use crate::config::{collection_from_env_value, ContentSource};
    use crate::repository::MemoryContentRepository;
    use cms::{ScamRecord, TacticRecord};
    use serde_json::json;
    use std::path::PathBuf;

    fn service(repo: MemoryContentRepository, tactics_collection: Option<&str>) -> CatalogService {
        let cfg = CoreConfig::new(
            ContentSource::Fixtures {
                dir: PathBuf::from("unused"),
            },
            collection_from_env_value(None, CatalogKind::Scams).unwrap(),
            collection_from_env_value(
                tactics_collection.map(str::to_string),
                CatalogKind::DarkPatterns,
            )
            .unwrap(),
        )
        .expect("CoreConfig::new should succeed");
        CatalogService::new(Arc::new(cfg), Arc::new(repo))
    }

    #[tokio::test]
    async fn visits_use_configured_collection() {
        let repo = MemoryContentRepository::new()
            .with_collection("tactics_v2", vec![json!({"_id": "t1", "tacticName": "Nagging"})]);
        let svc = service(repo, Some("tactics_v2"));

        let view = svc.visit::<TacticRecord>().await;
        assert_eq!(view.phase(), LoadPhase::Ready);
        assert_eq!(view.collection().as_str(), "tactics_v2");
        assert_eq!(view.visible().len(), 1);
    }

    #[tokio::test]
    async fn each_visit_fetches_its_own_snapshot() {
        let repo = Arc::new(
            MemoryContentRepository::new()
                .with_collection("scamtypes", vec![json!({"_id": "1"})]),
        );
        let cfg = CoreConfig::with_source(ContentSource::Fixtures {
            dir: PathBuf::from("unused"),
        })
        .unwrap();
        let svc = CatalogService::new(Arc::new(cfg), repo.clone());

        let first = svc.visit::<ScamRecord>().await;
        let second = svc.visit::<ScamRecord>().await;
        assert_eq!(first.snapshot(), second.snapshot());
        assert_eq!(repo.fetch_calls(), 2);
    }

    #[tokio::test]
    async fn missing_collection_is_a_failed_visit() {
        let svc = service(MemoryContentRepository::new(), None);
        let view = svc.visit::<ScamRecord>().await;
        assert_eq!(view.phase(), LoadPhase::Failed);
        assert!(view.visible().is_empty());
    }
}
