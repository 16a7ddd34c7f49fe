use scamwatch_types::TextError;
use std::path::PathBuf;

/// Failure of a content repository fetch.
///
/// Whatever the variant, the catalog view treats it the same way: "snapshot fetch failed".
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("CMS returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("invalid CMS response: {0}")]
    Cms(#[from] cms::CmsError),
    #[error("invalid YAML fixture: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to read fixture {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown collection: {0}")]
    UnknownCollection(String),
    #[error("collection {0} is unavailable")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid identifier: {0}")]
    Text(#[from] TextError),
    #[error("content repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
