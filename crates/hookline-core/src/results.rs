//! Results of one hook run

use serde::Serialize;

use crate::value::HookValue;

/// Ordered return values of the callbacks a run accepted.
///
/// A run that stopped on a falsy value is `halted`; the falsy value itself
/// is not part of the chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HookResults {
    chain: Vec<HookValue>,
    halted: bool,
}

impl HookResults {
    pub fn new(chain: Vec<HookValue>, halted: bool) -> Self {
        Self { chain, halted }
    }

    /// Return values in execution order
    pub fn chain(&self) -> &[HookValue] {
        &self.chain
    }

    pub fn into_chain(self) -> Vec<HookValue> {
        self.chain
    }

    /// Whether the run stopped before exhausting its callbacks
    pub fn halted(&self) -> bool {
        self.halted
    }

    pub fn not_halted(&self) -> bool {
        !self.halted
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}
