//! Backend config loader (strict parsing).
//!
//! Precedence: built-in defaults, then the YAML file (if present), then the
//! `PORT` environment override.

pub mod schema;

use std::fs;
use std::path::Path;

use humisense_core::error::{Result, SensorError};

pub use schema::{BackendConfig, ServerSection, SimulatedSection, SourceKind, SourceSection, UiSection};

pub const DEFAULT_CONFIG_PATH: &str = "humisense.yaml";

pub fn load_from_file(path: &str) -> Result<BackendConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SensorError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<BackendConfig> {
    let cfg: BackendConfig = if s.trim().is_empty() {
        BackendConfig::default()
    } else {
        serde_yaml::from_str(s)
            .map_err(|e| SensorError::BadRequest(format!("invalid yaml: {e}")))?
    };
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` if it exists (defaults otherwise) and apply the `PORT` override.
pub fn load(path: &str, port_env: Option<&str>) -> Result<BackendConfig> {
    let mut cfg = if Path::new(path).exists() {
        load_from_file(path)?
    } else {
        tracing::info!(path, "config file not found, using defaults");
        BackendConfig::default()
    };
    cfg.server.apply_port_override(port_env)?;
    Ok(cfg)
}
