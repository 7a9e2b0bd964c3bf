//! Inheritable hook registries
//!
//! A [`HookHierarchy`] stores one node per class and per instance. A node
//! starts without a registry of its own and reads through to its nearest
//! ancestor that has one. The first write to a node materializes a deep
//! copy of that ancestor registry, after which changes stay local.
//!
//! Materialization happens on first write, never when the node is created,
//! so callbacks an ancestor gains later remain visible to descendants that
//! have not written yet.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::callback::{CallbackEntry, CallbackList};
use crate::config::HooksConfig;
use crate::error::{HookError, HookResult};
use crate::executor::HookExecutor;
use crate::handle::HookHandle;
use crate::name::HookName;
use crate::options::HookOptions;
use crate::registry::HookRegistry;
use crate::results::HookResults;
use crate::scope::HookScope;
use crate::value::HookArgs;

/// Handle to a level of a [`HookHierarchy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LevelId(usize);

impl LevelId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a level stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelKind {
    Class,
    Instance,
}

struct HookLevel<S> {
    label: String,
    kind: LevelKind,
    parent: Option<LevelId>,
    /// `None` until the level writes for the first time
    registry: Option<HookRegistry<S>>,
    /// Options of hooks declared at this level
    declarations: HashMap<HookName, HookOptions<S>>,
}

/// Arena of class and instance levels with copy-on-write registries
pub struct HookHierarchy<S> {
    levels: Vec<HookLevel<S>>,
    empty: HookRegistry<S>,
    executor: HookExecutor,
}

impl<S> HookHierarchy<S> {
    pub fn new() -> Self {
        Self {
            levels: Vec::new(),
            empty: HookRegistry::new(),
            executor: HookExecutor::new(),
        }
    }

    /// Add a class without a parent
    pub fn add_root(&mut self, label: impl Into<String>) -> LevelId {
        self.push_level(label.into(), LevelKind::Class, None)
    }

    /// Add a class deriving from `parent`
    pub fn add_subclass(&mut self, parent: LevelId, label: impl Into<String>) -> HookResult<LevelId> {
        self.level(parent)?;
        Ok(self.push_level(label.into(), LevelKind::Class, Some(parent)))
    }

    /// Add an instance of `class`
    pub fn add_instance(&mut self, class: LevelId, label: impl Into<String>) -> HookResult<LevelId> {
        self.level(class)?;
        Ok(self.push_level(label.into(), LevelKind::Instance, Some(class)))
    }

    fn push_level(&mut self, label: String, kind: LevelKind, parent: Option<LevelId>) -> LevelId {
        let id = LevelId(self.levels.len());
        self.levels.push(HookLevel {
            label,
            kind,
            parent,
            registry: None,
            declarations: HashMap::new(),
        });
        id
    }

    fn level(&self, id: LevelId) -> HookResult<&HookLevel<S>> {
        self.levels
            .get(id.0)
            .ok_or(HookError::UnknownLevel { id: id.0 })
    }

    fn level_mut(&mut self, id: LevelId) -> HookResult<&mut HookLevel<S>> {
        self.levels
            .get_mut(id.0)
            .ok_or(HookError::UnknownLevel { id: id.0 })
    }

    pub fn label(&self, id: LevelId) -> HookResult<&str> {
        Ok(&self.level(id)?.label)
    }

    pub fn kind(&self, id: LevelId) -> HookResult<LevelKind> {
        Ok(self.level(id)?.kind)
    }

    pub fn parent(&self, id: LevelId) -> HookResult<Option<LevelId>> {
        Ok(self.level(id)?.parent)
    }

    /// `id` followed by its ancestors, nearest first
    pub fn ancestry(&self, id: LevelId) -> HookResult<Vec<LevelId>> {
        let mut chain = vec![id];
        let mut current = self.level(id)?.parent;
        while let Some(parent) = current {
            chain.push(parent);
            current = self.level(parent)?.parent;
        }
        Ok(chain)
    }

    /// Number of levels in the hierarchy
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Whether the level owns a registry of its own
    pub fn is_materialized(&self, id: LevelId) -> HookResult<bool> {
        Ok(self.level(id)?.registry.is_some())
    }

    /// Effective registry of a level.
    ///
    /// Falls through to the nearest materialized ancestor, or to an empty
    /// registry at the top. Reading never materializes.
    pub fn registry(&self, id: LevelId) -> HookResult<&HookRegistry<S>> {
        let mut current = Some(id);
        while let Some(level_id) = current {
            let level = self.level(level_id)?;
            if let Some(registry) = &level.registry {
                return Ok(registry);
            }
            current = level.parent;
        }
        Ok(&self.empty)
    }

    /// Own registry of a level, copying the inherited one on first use
    fn materialize(&mut self, id: LevelId) -> HookResult<&mut HookRegistry<S>> {
        let level = self.level(id)?;
        if level.registry.is_none() {
            let inherited = self.registry(id)?.clone_deep();
            debug!(
                "Materializing hook registry for {} ({} hook(s) inherited)",
                level.label,
                inherited.len()
            );
            self.level_mut(id)?.registry = Some(inherited);
        }

        let level = self.level_mut(id)?;
        Ok(level.registry.get_or_insert_with(HookRegistry::new))
    }

    /// Declare a hook at a level.
    ///
    /// Re-declaring a name replaces its options and keeps its callbacks.
    pub fn declare_hook(
        &mut self,
        id: LevelId,
        name: impl Into<HookName>,
        options: HookOptions<S>,
    ) -> HookResult<HookHandle> {
        let name = name.into();
        self.materialize(id)?.declare(name.clone());

        let level = self.level_mut(id)?;
        debug!("Declared hook {} on {}", name, level.label);
        level.declarations.insert(name.clone(), options);

        Ok(HookHandle::new(id, name))
    }

    /// Declare several hooks sharing the same options
    pub fn declare_hooks<I, N>(
        &mut self,
        id: LevelId,
        names: I,
        options: HookOptions<S>,
    ) -> HookResult<Vec<HookHandle>>
    where
        I: IntoIterator<Item = N>,
        N: Into<HookName>,
    {
        names
            .into_iter()
            .map(|name| self.declare_hook(id, name, options.clone()))
            .collect()
    }

    /// Options of the nearest declaration of `name` visible from `id`
    pub fn hook_options(&self, id: LevelId, name: impl Into<HookName>) -> HookResult<&HookOptions<S>> {
        let name = name.into();
        let mut current = Some(id);
        while let Some(level_id) = current {
            let level = self.level(level_id)?;
            if let Some(options) = level.declarations.get(&name) {
                return Ok(options);
            }
            current = level.parent;
        }
        Err(HookError::unknown_hook_at(name.as_str(), self.level(id)?.label.as_str()))
    }

    /// Whether `name` is declared at `id` or one of its ancestors
    pub fn is_declared(&self, id: LevelId, name: impl Into<HookName>) -> bool {
        self.hook_options(id, name).is_ok()
    }

    /// Append a callback to a declared hook at a level
    pub fn add_callback(
        &mut self,
        id: LevelId,
        name: impl Into<HookName>,
        entry: impl Into<CallbackEntry<S>>,
    ) -> HookResult<()> {
        let name = name.into();
        self.hook_options(id, &name)?;
        let entry = entry.into();
        debug!("Adding callback {} to hook {} on level {}", entry, name, id);
        self.materialize(id)?.append(name, entry);
        Ok(())
    }

    /// Callbacks a run of `name` at `id` would execute
    pub fn callbacks_for(&self, id: LevelId, name: impl Into<HookName>) -> HookResult<CallbackList<S>> {
        let name = name.into();
        self.hook_options(id, &name)?;
        Ok(self.registry(id)?.callbacks(name))
    }

    /// Snapshot the callbacks and options of a hook for a later run
    pub fn plan(&self, id: LevelId, name: impl Into<HookName>) -> HookResult<HookPlan<S>> {
        let name = name.into();
        let options = self.hook_options(id, &name)?.clone();
        let callbacks = self.registry(id)?.callbacks(&name);
        Ok(HookPlan {
            hook: name,
            callbacks,
            options,
            executor: self.executor,
        })
    }

    /// Run a hook at a level against `scope`
    pub fn run_hook(
        &self,
        id: LevelId,
        name: impl Into<HookName>,
        scope: &mut S,
        args: impl Into<HookArgs>,
    ) -> HookResult<HookResults>
    where
        S: HookScope,
    {
        let name = name.into();
        let options = self.hook_options(id, &name)?;
        let registry = self.registry(id)?;
        match registry.get(&name) {
            Some(callbacks) => self.executor.run(&name, scope, &args.into(), callbacks, options),
            None => Ok(HookResults::default()),
        }
    }

    /// Declare and populate hooks from configuration
    pub fn apply_config(&mut self, id: LevelId, config: &HooksConfig) -> HookResult<()> {
        for declaration in &config.hooks {
            let options = HookOptions::new().with_halts_on_falsey(declaration.halts_on_falsey);
            self.declare_hook(id, &declaration.name, options)?;
            for method in &declaration.callbacks {
                self.add_callback(id, &declaration.name, CallbackEntry::named(method.as_str()))?;
            }
        }
        Ok(())
    }
}

impl<S> Default for HookHierarchy<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for HookHierarchy<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for level in &self.levels {
            list.entry(&format_args!(
                "{} ({:?}, parent: {:?}, materialized: {})",
                level.label,
                level.kind,
                level.parent,
                level.registry.is_some()
            ));
        }
        list.finish()
    }
}

/// Callbacks and options of one hook, detached from the hierarchy
pub struct HookPlan<S> {
    hook: HookName,
    callbacks: CallbackList<S>,
    options: HookOptions<S>,
    executor: HookExecutor,
}

impl<S> HookPlan<S> {
    pub fn hook(&self) -> &HookName {
        &self.hook
    }

    pub fn callbacks(&self) -> &CallbackList<S> {
        &self.callbacks
    }

    pub fn options(&self) -> &HookOptions<S> {
        &self.options
    }

    /// Execute the snapshot against `scope`
    pub fn run(&self, scope: &mut S, args: &HookArgs) -> HookResult<HookResults>
    where
        S: HookScope,
    {
        self.executor
            .run(&self.hook, scope, args, &self.callbacks, &self.options)
    }
}

impl<S> Clone for HookPlan<S> {
    fn clone(&self) -> Self {
        Self {
            hook: self.hook.clone(),
            callbacks: self.callbacks.clone(),
            options: self.options.clone(),
            executor: self.executor,
        }
    }
}

impl<S> fmt::Debug for HookPlan<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookPlan")
            .field("hook", &self.hook)
            .field("callbacks", &self.callbacks)
            .field("options", &self.options)
            .finish()
    }
}
