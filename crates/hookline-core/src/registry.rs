//! Hook registry: hook name to callback list

use std::collections::HashMap;
use std::fmt;

use crate::callback::{CallbackEntry, CallbackList};
use crate::name::HookName;

/// Callback lists keyed by normalized hook name
pub struct HookRegistry<S> {
    hooks: HashMap<HookName, CallbackList<S>>,
}

impl<S> HookRegistry<S> {
    /// Create a new empty hook registry
    pub fn new() -> Self {
        Self {
            hooks: HashMap::new(),
        }
    }

    /// Get the list for a hook, if the registry holds one
    pub fn get(&self, name: impl Into<HookName>) -> Option<&CallbackList<S>> {
        self.hooks.get(&name.into())
    }

    /// Copy of the list for a hook; empty when the registry holds none
    pub fn callbacks(&self, name: impl Into<HookName>) -> CallbackList<S> {
        self.get(name).cloned().unwrap_or_default()
    }

    /// Replace the list for a hook
    pub fn set(&mut self, name: impl Into<HookName>, callbacks: CallbackList<S>) {
        self.hooks.insert(name.into(), callbacks);
    }

    /// Append a callback, creating the list when absent
    pub fn append(&mut self, name: impl Into<HookName>, entry: impl Into<CallbackEntry<S>>) {
        self.hooks.entry(name.into()).or_default().push(entry);
    }

    /// Ensure a (possibly empty) list exists for a hook
    pub fn declare(&mut self, name: impl Into<HookName>) {
        self.hooks.entry(name.into()).or_default();
    }

    pub fn contains(&self, name: impl Into<HookName>) -> bool {
        self.hooks.contains_key(&name.into())
    }

    /// Hook names held by this registry, sorted
    pub fn hook_names(&self) -> Vec<&HookName> {
        let mut names: Vec<_> = self.hooks.keys().collect();
        names.sort();
        names
    }

    /// Number of hooks with a list
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Total number of callbacks across all hooks
    pub fn callback_count(&self) -> usize {
        self.hooks.values().map(CallbackList::len).sum()
    }

    /// Copy the registry with every callback list cloned.
    ///
    /// Mutating either side afterwards never shows up on the other.
    pub fn clone_deep(&self) -> Self {
        Self {
            hooks: self
                .hooks
                .iter()
                .map(|(name, callbacks)| (name.clone(), callbacks.clone()))
                .collect(),
        }
    }
}

impl<S> Default for HookRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for HookRegistry<S> {
    fn clone(&self) -> Self {
        self.clone_deep()
    }
}

impl<S> fmt::Debug for HookRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.hook_names().into_iter().map(|name| (name, &self.hooks[name])))
            .finish()
    }
}
