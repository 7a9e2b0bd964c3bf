//! Normalized hook names

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical key for a hook.
///
/// String slices, owned strings and existing names all convert into the
/// same key, so `"after_eight"` and `HookName::new("after_eight")` address
/// one callback list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HookName(String);

impl HookName {
    /// Create a hook name
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for HookName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for HookName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HookName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for HookName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&String> for HookName {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}

impl From<&HookName> for HookName {
    fn from(name: &HookName) -> Self {
        name.clone()
    }
}

impl PartialEq<str> for HookName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for HookName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
