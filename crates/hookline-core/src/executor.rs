//! Hook execution engine
//!
//! Walks a callback list in registration order, invokes each entry against
//! its execution context, collects the return values and applies the
//! halt-on-falsey policy.

use tracing::{debug, trace};

use crate::callback::{CallbackEntry, CallbackList};
use crate::error::{HookError, HookResult};
use crate::name::HookName;
use crate::options::{HookOptions, ScopeResolution};
use crate::results::HookResults;
use crate::scope::HookScope;
use crate::value::{HookArgs, HookValue, is_falsey};

/// Hook executor
#[derive(Debug, Clone, Copy, Default)]
pub struct HookExecutor;

impl HookExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Run `callbacks` for `hook` against `scope`.
    ///
    /// Every callback receives the same `args`. The first error returned by
    /// a callback, or by resolving a named callback, aborts the run and is
    /// returned as is.
    pub fn run<S: HookScope>(
        &self,
        hook: &HookName,
        scope: &mut S,
        args: &HookArgs,
        callbacks: &CallbackList<S>,
        options: &HookOptions<S>,
    ) -> HookResult<HookResults> {
        if callbacks.is_empty() {
            debug!("No callbacks registered for hook: {}", hook);
            return Ok(HookResults::default());
        }

        debug!(
            "Running {} callback(s) for hook: {} (halts_on_falsey: {})",
            callbacks.len(),
            hook,
            options.halts_on_falsey
        );

        let mut chain = Vec::with_capacity(callbacks.len());

        for entry in callbacks {
            trace!("Executing callback {} for hook: {}", entry, hook);
            let value = self.execute_callback(hook, scope, entry, args, &options.scope)?;

            if options.halts_on_falsey && is_falsey(&value) {
                debug!("Callback {} returned {}, halting hook: {}", entry, value, hook);
                break;
            }

            chain.push(value);
        }

        let halted = chain.len() != callbacks.len();
        Ok(HookResults::new(chain, halted))
    }

    /// Execute a single callback under the configured scope policy.
    ///
    /// A shared scope stays locked while its callback runs. A nested run
    /// that resolves to the same shared scope fails instead of blocking.
    fn execute_callback<S: HookScope>(
        &self,
        hook: &HookName,
        scope: &mut S,
        entry: &CallbackEntry<S>,
        args: &HookArgs,
        resolution: &ScopeResolution<S>,
    ) -> HookResult<HookValue> {
        match resolution.resolve(entry, scope) {
            Some(shared) => {
                let Some(mut context) = shared.try_lock() else {
                    return Err(HookError::invocation_in(
                        hook.as_str(),
                        format!("scope for callback {} is already in use by a running hook", entry),
                    ));
                };
                Self::invoke(hook, &mut *context, entry, args)
            }
            None => Self::invoke(hook, scope, entry, args),
        }
    }

    fn invoke<S: HookScope>(
        hook: &HookName,
        context: &mut S,
        entry: &CallbackEntry<S>,
        args: &HookArgs,
    ) -> HookResult<HookValue> {
        match entry {
            CallbackEntry::Named(method) => match context.dispatch(method, args) {
                Some(result) => result,
                None => Err(HookError::callback_resolution(
                    hook.as_str(),
                    method.as_str(),
                    context.scope_name(),
                )),
            },
            CallbackEntry::Inline(callback) => callback.call(context, args),
        }
    }
}
