//! Hookline
//!
//! Inheritable, ordered callback chains for Rust types. This crate
//! re-exports [`hookline_core`] and adds logging setup for binaries.

pub mod logging;

pub use hookline_core::*;
pub use logging::{LoggingConfig, init_logging};
