//! humisense core: transport-agnostic sensor types, error taxonomy, and the
//! decoders for raw sensor frames.
//!
//! This crate defines the JSON contracts served by the backend and the error
//! surface shared by every crate in the workspace. It carries no runtime or
//! HTTP dependencies so it can be reused by other front ends.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! A bad frame from a sensor must surface as `SensorError`, never a crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod device;
pub mod error;
pub mod reading;

/// Shared result type.
pub use error::{Result, SensorError};
pub use reading::{now_ms, Health, Reading};
