//! Shared, reloadable catalog handle.

use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::error::CatalogError;
use super::store::Catalog;

/// Thread-safe handle to the current catalog.
///
/// Readers take a snapshot (`Arc<Catalog>`) and query it without holding
/// any lock, so a reload never exposes a half-built catalog: the new one is
/// built completely, then swapped in with a single pointer update.
#[derive(Clone)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Arc<Catalog>>>,
}

impl SharedCatalog {
    /// Wrap an already-built catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    /// Load a catalog from a description file.
    ///
    /// This will fail if the file is missing or invalid.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        Catalog::load(path).map(Self::new)
    }

    /// The catalog as of now.
    pub async fn snapshot(&self) -> Arc<Catalog> {
        let guard = self.inner.read().await;
        Arc::clone(&guard)
    }

    /// Replace the current catalog.
    pub async fn replace(&self, catalog: Catalog) {
        let catalog = Arc::new(catalog);
        let mut guard = self.inner.write().await;
        *guard = catalog;
    }

    /// Rebuild the catalog from a description file.
    ///
    /// On success, swaps in the new catalog and returns its network count.
    /// On failure, the existing catalog is preserved and the error is
    /// returned.
    pub async fn reload(&self, path: &Path) -> Result<usize, CatalogError> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Catalog::from_json(&json)?;
        let count = catalog.len();

        self.replace(catalog).await;
        Ok(count)
    }
}
