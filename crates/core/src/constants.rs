//! Constants used throughout the Scamwatch core crate.

/// Category filter value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// Character budget for list-card description previews.
pub const PREVIEW_CHAR_BUDGET: usize = 150;

/// Suffix appended to a truncated preview.
pub const PREVIEW_ELLIPSIS: &str = "...";

/// Default directory for fixture content when no CMS URL or fixture dir is configured.
pub const DEFAULT_FIXTURE_DIR: &str = "content";

/// Default timeout for a single CMS fetch-all request.
pub const DEFAULT_CMS_TIMEOUT_SECS: u64 = 10;

/// Path template segment under the CMS base URL: `{base}/collections/{name}/items`.
pub const CMS_COLLECTIONS_PATH: &str = "collections";
