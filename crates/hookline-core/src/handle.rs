//! Typed handles to declared hooks

use std::fmt;

use crate::callback::{CallbackEntry, CallbackList};
use crate::error::HookResult;
use crate::hierarchy::{HookHierarchy, LevelId};
use crate::name::HookName;
use crate::results::HookResults;
use crate::scope::HookScope;
use crate::value::HookArgs;

/// A hook bound to the level it was declared on.
///
/// Returned by [`HookHierarchy::declare_hook`]; stands in for a generated
/// per-hook writer, so `after_eight.on(&mut hooks, "dine")` registers a
/// callback on the declaring level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HookHandle {
    level: LevelId,
    name: HookName,
}

impl HookHandle {
    pub fn new(level: LevelId, name: HookName) -> Self {
        Self { level, name }
    }

    pub fn level(&self) -> LevelId {
        self.level
    }

    pub fn name(&self) -> &HookName {
        &self.name
    }

    /// Same hook, addressed from another level (a subclass or instance)
    pub fn at(&self, level: LevelId) -> Self {
        Self {
            level,
            name: self.name.clone(),
        }
    }

    /// Append a callback
    pub fn on<S>(
        &self,
        hooks: &mut HookHierarchy<S>,
        entry: impl Into<CallbackEntry<S>>,
    ) -> HookResult<()> {
        hooks.add_callback(self.level, &self.name, entry)
    }

    /// Callbacks currently registered for this hook
    pub fn callbacks<S>(&self, hooks: &HookHierarchy<S>) -> HookResult<CallbackList<S>> {
        hooks.callbacks_for(self.level, &self.name)
    }

    /// Run the hook against `scope`
    pub fn run<S: HookScope>(
        &self,
        hooks: &HookHierarchy<S>,
        scope: &mut S,
        args: impl Into<HookArgs>,
    ) -> HookResult<HookResults> {
        hooks.run_hook(self.level, &self.name, scope, args)
    }
}

impl fmt::Display for HookHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.level)
    }
}
