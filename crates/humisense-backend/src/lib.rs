//! humisense backend library entry.
//!
//! Wires config, the reading source, and the HTTP routes into one axum
//! service. Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod http;
pub mod obs;
pub mod router;
pub mod server;
pub mod source;
