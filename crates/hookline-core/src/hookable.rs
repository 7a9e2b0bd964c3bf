//! Hooks embedded in user types

use std::sync::Arc;

use parking_lot::RwLock;

use crate::callback::{CallbackEntry, CallbackList};
use crate::error::HookResult;
use crate::handle::HookHandle;
use crate::hierarchy::{HookHierarchy, LevelId};
use crate::name::HookName;
use crate::options::HookOptions;
use crate::results::HookResults;
use crate::scope::HookScope;
use crate::value::HookArgs;

/// Hierarchy shared between a class and its instances.
///
/// Callers that mutate it from several threads rely on this lock; the
/// hierarchy itself does no locking.
pub type SharedHooks<S> = Arc<RwLock<HookHierarchy<S>>>;

/// Wrap a hierarchy for sharing
pub fn shared_hooks<S>(hooks: HookHierarchy<S>) -> SharedHooks<S> {
    Arc::new(RwLock::new(hooks))
}

/// A type carrying its own extension points.
///
/// Implementors hold a [`SharedHooks`] handle and the level they occupy in
/// it (usually an instance level under their class). Hooks then run with
/// the value itself as scope.
pub trait Hookable: HookScope + Sized {
    fn hooks(&self) -> &SharedHooks<Self>;

    fn hook_level(&self) -> LevelId;

    /// Declare a hook on this value's level
    fn define_hook(
        &self,
        name: impl Into<HookName>,
        options: HookOptions<Self>,
    ) -> HookResult<HookHandle> {
        self.hooks()
            .write()
            .declare_hook(self.hook_level(), name, options)
    }

    /// Append a callback on this value's level
    fn on(
        &self,
        name: impl Into<HookName>,
        entry: impl Into<CallbackEntry<Self>>,
    ) -> HookResult<()> {
        self.hooks()
            .write()
            .add_callback(self.hook_level(), name, entry)
    }

    fn callbacks_for(&self, name: impl Into<HookName>) -> HookResult<CallbackList<Self>> {
        self.hooks().read().callbacks_for(self.hook_level(), name)
    }

    /// Run a hook with `self` as scope.
    ///
    /// The callback list is snapshotted before the first callback runs, so
    /// callbacks may register further callbacks.
    fn run_hook(
        &mut self,
        name: impl Into<HookName>,
        args: impl Into<HookArgs>,
    ) -> HookResult<HookResults> {
        let plan = self.hooks().read().plan(self.hook_level(), name)?;
        plan.run(self, &args.into())
    }
}
