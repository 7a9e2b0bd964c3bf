//! Callback values and positional arguments

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{HookError, HookResult};

/// Value returned by callbacks and passed to them as arguments
pub type HookValue = Value;

/// Whether a callback result counts as falsy for halting.
///
/// Only `false` and `null` are falsy. `0`, `""`, `[]` and `{}` are not.
pub fn is_falsey(value: &HookValue) -> bool {
    matches!(value, Value::Null | Value::Bool(false))
}

/// Positional arguments handed identically to every callback of a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HookArgs(Vec<HookValue>);

impl HookArgs {
    pub fn new(values: Vec<HookValue>) -> Self {
        Self(values)
    }

    /// Arguments for a run that passes nothing
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HookValue> {
        self.0.get(index)
    }

    pub fn as_slice(&self) -> &[HookValue] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HookValue> {
        self.0.iter()
    }

    /// Fetch a required argument, failing the callback when it is missing
    pub fn arg(&self, index: usize) -> HookResult<&HookValue> {
        self.0.get(index).ok_or_else(|| {
            HookError::invocation(format!(
                "missing argument {} (given {})",
                index,
                self.0.len()
            ))
        })
    }

    /// Check that exactly `expected` arguments were passed.
    ///
    /// Callbacks use this to reject a run whose arguments do not fit their
    /// signature; the resulting error aborts the whole chain.
    pub fn expect_arity(&self, expected: usize) -> HookResult<&[HookValue]> {
        if self.0.len() == expected {
            Ok(&self.0)
        } else {
            Err(HookError::invocation(format!(
                "wrong number of arguments (given {}, expected {})",
                self.0.len(),
                expected
            )))
        }
    }
}

impl From<Vec<HookValue>> for HookArgs {
    fn from(values: Vec<HookValue>) -> Self {
        Self(values)
    }
}

impl From<()> for HookArgs {
    fn from(_: ()) -> Self {
        Self::empty()
    }
}

impl<const N: usize> From<[HookValue; N]> for HookArgs {
    fn from(values: [HookValue; N]) -> Self {
        Self(values.into())
    }
}

impl FromIterator<HookValue> for HookArgs {
    fn from_iter<I: IntoIterator<Item = HookValue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a HookArgs {
    type Item = &'a HookValue;
    type IntoIter = std::slice::Iter<'a, HookValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
