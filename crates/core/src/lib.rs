//! # Scamwatch Core
//!
//! Catalog logic for the Scamwatch site.
//!
//! This crate contains the data side of a page visit:
//! - fetching a collection from the content repository (hosted CMS, fixture files, memory)
//! - holding the snapshot as per-visit view state
//! - deriving the filtered list, the category options and the selected detail item
//!
//! **No API concerns**: routing, HTML rendering and JSON responses belong in `api-rest`
//! and `api-shared`.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod repository;
pub mod service;

pub use catalog::{CatalogEntity, CatalogKind, CatalogView, CategoryFilter, LoadPhase};
pub use config::{ContentSource, CoreConfig};
pub use error::{CatalogError, CatalogResult, RepositoryError};
pub use repository::ContentRepository;
pub use service::CatalogService;

pub use cms::{ScamRecord, TacticRecord};
pub use scamwatch_types::{CollectionName, EntityId};
