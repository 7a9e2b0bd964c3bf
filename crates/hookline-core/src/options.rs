//! Per-hook execution options

use std::fmt;
use std::sync::Arc;

use crate::callback::CallbackEntry;
use crate::scope::SharedScope;

type ResolverFn<S> = dyn Fn(&CallbackEntry<S>, &S) -> Option<SharedScope<S>> + Send + Sync;

/// How the execution context of each callback is chosen
pub enum ScopeResolution<S> {
    /// Run every callback against the scope passed to the run
    Receiver,
    /// Run every callback against one predetermined object.
    ///
    /// The object is locked for the duration of each callback, so a
    /// callback must not run another hook bound to the same object; such a
    /// nested run returns a `CallbackInvocation` error.
    Fixed(SharedScope<S>),
    /// Ask a resolver per entry.
    ///
    /// `None` means no opinion: the entry runs against the run scope.
    Resolver(Arc<ResolverFn<S>>),
}

impl<S> ScopeResolution<S> {
    /// Build a resolver policy from a closure
    pub fn resolver<F>(resolver: F) -> Self
    where
        F: Fn(&CallbackEntry<S>, &S) -> Option<SharedScope<S>> + Send + Sync + 'static,
    {
        Self::Resolver(Arc::new(resolver))
    }

    /// Pick the context for `entry`; `None` selects the run scope
    pub(crate) fn resolve(&self, entry: &CallbackEntry<S>, scope: &S) -> Option<SharedScope<S>> {
        match self {
            Self::Receiver => None,
            Self::Fixed(shared) => Some(Arc::clone(shared)),
            Self::Resolver(resolver) => resolver(entry, scope),
        }
    }
}

impl<S> Default for ScopeResolution<S> {
    fn default() -> Self {
        Self::Receiver
    }
}

impl<S> Clone for ScopeResolution<S> {
    fn clone(&self) -> Self {
        match self {
            Self::Receiver => Self::Receiver,
            Self::Fixed(shared) => Self::Fixed(Arc::clone(shared)),
            Self::Resolver(resolver) => Self::Resolver(Arc::clone(resolver)),
        }
    }
}

impl<S> fmt::Debug for ScopeResolution<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Receiver => f.write_str("Receiver"),
            Self::Fixed(_) => f.write_str("Fixed(..)"),
            Self::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

/// Options attached to a hook name when it is declared
pub struct HookOptions<S> {
    /// Stop at, and drop, the first `false`/`null` result
    pub halts_on_falsey: bool,
    /// Execution context policy
    pub scope: ScopeResolution<S>,
}

impl<S> HookOptions<S> {
    pub fn new() -> Self {
        Self {
            halts_on_falsey: false,
            scope: ScopeResolution::Receiver,
        }
    }

    /// Options for a hook that halts on the first falsy result
    pub fn halting() -> Self {
        Self::new().with_halts_on_falsey(true)
    }

    pub fn with_halts_on_falsey(mut self, halts: bool) -> Self {
        self.halts_on_falsey = halts;
        self
    }

    pub fn with_scope(mut self, scope: ScopeResolution<S>) -> Self {
        self.scope = scope;
        self
    }

    /// Run every callback against `scope`
    pub fn with_fixed_scope(self, scope: SharedScope<S>) -> Self {
        self.with_scope(ScopeResolution::Fixed(scope))
    }
}

impl<S> Default for HookOptions<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for HookOptions<S> {
    fn clone(&self) -> Self {
        Self {
            halts_on_falsey: self.halts_on_falsey,
            scope: self.scope.clone(),
        }
    }
}

impl<S> fmt::Debug for HookOptions<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookOptions")
            .field("halts_on_falsey", &self.halts_on_falsey)
            .field("scope", &self.scope)
            .finish()
    }
}
