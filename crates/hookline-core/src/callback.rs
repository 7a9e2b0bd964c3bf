//! Callback entries and ordered callback lists

use std::fmt;
use std::sync::Arc;

use crate::error::HookResult;
use crate::value::{HookArgs, HookValue};

type InlineFn<S> = dyn Fn(&mut S, &HookArgs) -> HookResult<HookValue> + Send + Sync;

/// Closure captured at registration time.
///
/// The closure receives its execution context as the first argument
/// instead of having a receiver rebound.
pub struct InlineCallback<S> {
    callback: Arc<InlineFn<S>>,
    label: Option<String>,
}

impl<S> InlineCallback<S> {
    /// Create a new inline callback
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&mut S, &HookArgs) -> HookResult<HookValue> + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
            label: None,
        }
    }

    /// Attach a label shown in logs and `Debug` output
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Invoke the closure against `context`
    pub fn call(&self, context: &mut S, args: &HookArgs) -> HookResult<HookValue> {
        (self.callback)(context, args)
    }

    /// Whether two callbacks share the same closure
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.callback, &other.callback)
    }
}

impl<S> Clone for InlineCallback<S> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
            label: self.label.clone(),
        }
    }
}

impl<S> fmt::Debug for InlineCallback<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InlineCallback")
            .field("label", &self.label)
            .finish()
    }
}

/// One registered callback
pub enum CallbackEntry<S> {
    /// Operation name dispatched on the scope at execution time
    Named(String),
    /// Closure invoked with the execution context
    Inline(InlineCallback<S>),
}

impl<S> CallbackEntry<S> {
    /// Reference an operation on the scope by name
    pub fn named(method: impl Into<String>) -> Self {
        Self::Named(method.into())
    }

    /// Wrap a closure
    pub fn inline<F>(callback: F) -> Self
    where
        F: Fn(&mut S, &HookArgs) -> HookResult<HookValue> + Send + Sync + 'static,
    {
        Self::Inline(InlineCallback::new(callback))
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Inline(_))
    }

    /// Method name for named entries
    pub fn method_name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Inline(_) => None,
        }
    }
}

impl<S> Clone for CallbackEntry<S> {
    fn clone(&self) -> Self {
        match self {
            Self::Named(name) => Self::Named(name.clone()),
            Self::Inline(callback) => Self::Inline(callback.clone()),
        }
    }
}

impl<S> PartialEq for CallbackEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Named(a), Self::Named(b)) => a == b,
            (Self::Inline(a), Self::Inline(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl<S> fmt::Debug for CallbackEntry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Inline(callback) => f.debug_tuple("Inline").field(callback).finish(),
        }
    }
}

impl<S> fmt::Display for CallbackEntry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, ":{}", name),
            Self::Inline(callback) => match callback.label() {
                Some(label) => write!(f, "<inline {}>", label),
                None => f.write_str("<inline>"),
            },
        }
    }
}

impl<S> From<&str> for CallbackEntry<S> {
    fn from(method: &str) -> Self {
        Self::named(method)
    }
}

impl<S> From<String> for CallbackEntry<S> {
    fn from(method: String) -> Self {
        Self::Named(method)
    }
}

impl<S> From<InlineCallback<S>> for CallbackEntry<S> {
    fn from(callback: InlineCallback<S>) -> Self {
        Self::Inline(callback)
    }
}

/// Ordered callbacks for one hook.
///
/// Entries replay in registration order. Cloning copies the sequence;
/// closures themselves are shared.
pub struct CallbackList<S> {
    entries: Vec<CallbackEntry<S>>,
}

impl<S> CallbackList<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: impl Into<CallbackEntry<S>>) {
        self.entries.push(entry.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&CallbackEntry<S>> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CallbackEntry<S>> {
        self.entries.iter()
    }

    /// Method names of the named entries, in order
    pub fn names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(CallbackEntry::method_name)
            .collect()
    }
}

impl<S> Default for CallbackList<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for CallbackList<S> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<S> PartialEq for CallbackList<S> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<S> fmt::Debug for CallbackList<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

impl<S> FromIterator<CallbackEntry<S>> for CallbackList<S> {
    fn from_iter<I: IntoIterator<Item = CallbackEntry<S>>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<S> From<Vec<CallbackEntry<S>>> for CallbackList<S> {
    fn from(entries: Vec<CallbackEntry<S>>) -> Self {
        Self { entries }
    }
}

impl<'a, S> IntoIterator for &'a CallbackList<S> {
    type Item = &'a CallbackEntry<S>;
    type IntoIter = std::slice::Iter<'a, CallbackEntry<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
