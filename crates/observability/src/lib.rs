//! Tracing, logging (shared setup).

pub mod tracing;

pub use tracing::{init, InitError};
