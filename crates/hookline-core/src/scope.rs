//! Scopes that callbacks run against

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::HookResult;
use crate::value::{HookArgs, HookValue};

/// An object named callbacks are dispatched on.
///
/// Dispatch happens at execution time, so a scope may start answering to a
/// method after callbacks naming it were registered.
pub trait HookScope {
    /// Invoke the operation called `method`.
    ///
    /// Returns `None` when the scope does not define `method`; the executor
    /// turns that into a callback resolution error.
    fn dispatch(&mut self, method: &str, args: &HookArgs) -> Option<HookResult<HookValue>>;

    /// Label used in error messages
    fn scope_name(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

/// A scope shared between the caller and hook options (fixed scopes,
/// resolver results).
///
/// Not reentrant: while a callback runs against it, runs that need the same
/// scope fail rather than wait.
pub type SharedScope<S> = Arc<Mutex<S>>;

/// Wrap a scope for use as a fixed execution context
pub fn shared_scope<S>(scope: S) -> SharedScope<S> {
    Arc::new(Mutex::new(scope))
}
