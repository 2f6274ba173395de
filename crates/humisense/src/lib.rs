//! Top-level facade crate for humisense.
//!
//! Re-exports the core types and the backend library so users can depend on a single crate.

pub mod core {
    pub use humisense_core::*;
}

pub mod backend {
    pub use humisense_backend::*;
}
