use crate::config::Config;
use crate::services::collapse::{CollapseBackend, StatevectorBackend};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub collapse: Arc<dyn CollapseBackend>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_backend(config, Arc::new(StatevectorBackend))
    }

    /// Inject an alternate simulator backend, used by tests.
    pub fn with_backend(config: Config, collapse: Arc<dyn CollapseBackend>) -> Self {
        Self {
            config: Arc::new(config),
            collapse,
        }
    }
}
