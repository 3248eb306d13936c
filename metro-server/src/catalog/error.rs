//! Catalog error types.

use std::path::PathBuf;

use crate::domain::NetworkError;

/// Errors that can occur when loading a network catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Description file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Description file is not valid JSON for a catalog
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A network in the description is structurally invalid
    #[error("network {city}: {source}")]
    Network { city: String, source: NetworkError },

    /// Two networks resolve to the same slug
    #[error("network slug {0:?} is used more than once")]
    DuplicateNetwork(String),
}
