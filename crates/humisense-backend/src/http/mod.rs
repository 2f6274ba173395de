//! Route handlers.

pub mod error;
pub mod health;
pub mod latest;
pub mod metrics;
pub mod shell;

pub use error::ApiError;
