//! Station catalog shared across optimisation runs.
//!
//! The dataset is read on first use and shared read-only afterwards by the
//! handle and its clones. The binary builds one handle per process.
//! Concurrent first callers wait on the same initialisation; a failed load
//! leaves the cell empty so the next call retries.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;

use super::catalog::StationCatalog;
use super::error::CatalogError;

/// Lazily loaded, shared station catalog.
///
/// Cheap to clone; clones share the same cell. Handles built separately
/// with [`SharedCatalog::new`] each load their own copy, even for the same
/// path.
#[derive(Debug, Clone)]
pub struct SharedCatalog {
    path: PathBuf,
    cell: Arc<OnceCell<Arc<StationCatalog>>>,
}

impl SharedCatalog {
    /// Create a handle that loads `path` on first access.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: Arc::new(OnceCell::new()),
        }
    }

    /// Create a handle around an already-loaded catalog.
    pub fn preloaded(catalog: StationCatalog) -> Self {
        Self {
            path: PathBuf::new(),
            cell: Arc::new(OnceCell::new_with(Some(Arc::new(catalog)))),
        }
    }

    /// Get the catalog, loading it if this is the first call.
    pub async fn get(&self) -> Result<Arc<StationCatalog>, CatalogError> {
        self.cell
            .get_or_try_init(|| async {
                let json = tokio::fs::read_to_string(&self.path)
                    .await
                    .map_err(|source| CatalogError::Io {
                        path: self.path.clone(),
                        source,
                    })?;
                let catalog = StationCatalog::from_json(&json)?;
                info!(
                    path = %self.path.display(),
                    stations = catalog.len(),
                    "loaded station catalog"
                );
                Ok::<_, CatalogError>(Arc::new(catalog))
            })
            .await
            .cloned()
    }

    /// Whether the catalog has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }
}
