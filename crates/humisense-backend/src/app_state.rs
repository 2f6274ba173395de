//! Shared application state for the backend.
//!
//! Everything here is fixed at startup; handlers only read it. The metrics
//! registry is the one piece updated per request and it is lock-free.

use std::sync::Arc;

use humisense_core::error::Result;

use crate::config::BackendConfig;
use crate::obs::BackendMetrics;
use crate::source::{self, ReadingSource};

#[derive(Clone)]
pub struct AppState {
    cfg: Arc<BackendConfig>,
    source: Arc<dyn ReadingSource>,
    metrics: Arc<BackendMetrics>,
}

impl AppState {
    /// Build state with the source selected in config.
    pub fn new(cfg: BackendConfig) -> Result<Self> {
        cfg.validate()?;
        let source = source::build(&cfg.source);
        Ok(Self::with_source(cfg, source))
    }

    /// Build state around an already constructed source.
    pub fn with_source(cfg: BackendConfig, source: Arc<dyn ReadingSource>) -> Self {
        Self {
            cfg: Arc::new(cfg),
            source,
            metrics: Arc::new(BackendMetrics::default()),
        }
    }

    pub fn cfg(&self) -> &BackendConfig {
        &self.cfg
    }

    pub fn source(&self) -> Arc<dyn ReadingSource> {
        Arc::clone(&self.source)
    }

    pub fn metrics(&self) -> &BackendMetrics {
        &self.metrics
    }
}
