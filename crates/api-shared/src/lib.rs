//! # API Shared
//!
//! Shared response types for the Scamwatch HTTP surface.
//!
//! Contains:
//! - JSON response bodies with OpenAPI schemas (`dto` module)
//! - the `HealthService` used by the `/health` endpoint
//!
//! Used by `api-rest` and the workspace's `scamwatch-run` binary.

pub mod dto;
pub mod health;

pub use dto::{CatalogItem, CatalogListRes, HealthRes};
pub use health::HealthService;
