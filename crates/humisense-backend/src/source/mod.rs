//! Reading sources behind `/latest`.
//!
//! A source is the external collaborator that produces samples. The route
//! handler only sees the trait object held in `AppState`.

pub mod simulated;
pub mod stub;

use std::sync::Arc;

use async_trait::async_trait;
use humisense_core::{Reading, Result};

use crate::config::{SourceKind, SourceSection};

pub use simulated::{DeviceSource, SimulatedBoard};
pub use stub::StubSource;

#[async_trait]
pub trait ReadingSource: Send + Sync {
    /// Short label used in logs and metrics.
    fn kind(&self) -> &'static str;
    async fn latest(&self) -> Result<Reading>;
}

/// Build the source selected by `source.kind`.
pub fn build(cfg: &SourceSection) -> Arc<dyn ReadingSource> {
    match cfg.kind {
        SourceKind::Stub => Arc::new(StubSource::new()),
        SourceKind::Simulated => {
            let board = Arc::new(SimulatedBoard::new(cfg.dht20_addr, &cfg.simulated));
            Arc::new(DeviceSource::new(
                Arc::clone(&board),
                board,
                cfg.dht20_addr,
                cfg.photores_gpio,
            )
            .with_kind(cfg.kind.as_str()))
        }
    }
}
