//! Rate source abstractions and implementations.
//!
//! This module contains:
//! - The `RateSource` trait every source implements
//! - Connection settings (`NbpConfig`)
//! - The NBP implementation
//!
//! Sources only translate single requests. Backward date search, series
//! normalization and argument validation live in the resolver and history
//! modules, not in the sources themselves.

mod config;
mod traits;

pub mod nbp;

// Re-exports
pub use config::{NbpConfig, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT};
pub use nbp::NbpProvider;
pub use traits::RateSource;
