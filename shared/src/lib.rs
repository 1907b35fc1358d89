//! ViveFit Shared Library
//!
//! This crate contains the calculators, the routine catalog and the request
//! and response types used by the backend and the WASM module.

pub mod body_metrics;
pub mod errors;
pub mod routines;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use body_metrics::*;
pub use errors::*;
pub use routines::*;
pub use types::*;
