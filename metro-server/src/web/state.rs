//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::SharedCatalog;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Reloadable set of city networks
    pub catalog: SharedCatalog,

    /// Time and fare parameters
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: SharedCatalog, config: PlannerConfig) -> Self {
        Self {
            catalog,
            config: Arc::new(config),
        }
    }
}
