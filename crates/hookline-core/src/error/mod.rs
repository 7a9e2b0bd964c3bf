//! Error types for Hookline
//!
//! Every failure in the engine is a programmer error (wrong hook name,
//! missing method, bad arity). Errors surface immediately and are never
//! retried or swallowed by the executor.

mod constructors;
mod types;

pub use types::{HookError, HookResult};
