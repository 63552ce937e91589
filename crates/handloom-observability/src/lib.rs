//! Observability setup for the storefront.
//!
//! This crate provides:
//! - `LoggingConfig` - Level and output format for structured logs
//! - `init_logging` - Installs the global `tracing` subscriber
//!
//! Library crates only emit `tracing` events; the application shell decides
//! whether and how they are printed.

mod logging;

pub use logging::*;
