use std::sync::Arc;

use crate::catalog::RoleCatalog;
use crate::config::Config;
use crate::errors::AppError;
use crate::scoring::{CompatibilityScorer, WeightedScorer};

/// Shared application state handed to every advisor operation.
///
/// Nothing here is global: the catalog, scorer and configuration are injected.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RoleCatalog>,
    /// Pluggable scorer. Default: WeightedScorer.
    pub scorer: Arc<dyn CompatibilityScorer>,
    pub config: Config,
}

impl AppState {
    pub fn new(
        catalog: RoleCatalog,
        scorer: Arc<dyn CompatibilityScorer>,
        config: Config,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            scorer,
            config,
        }
    }

    /// Loads the catalog named by `config` and pairs it with the default scorer.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let catalog = RoleCatalog::load(config.catalog_path.as_deref())?;
        Ok(Self::new(catalog, Arc::new(WeightedScorer), config))
    }
}
