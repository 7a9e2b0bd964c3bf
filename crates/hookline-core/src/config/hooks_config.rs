//! Hook declaration configuration

use serde::{Deserialize, Serialize};

use crate::error::{HookError, HookResult};
use crate::name::HookName;

/// One hook to declare, with the named callbacks to register on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookDeclaration {
    /// Hook name
    pub name: HookName,

    /// Stop at the first `false`/`null` result
    #[serde(default)]
    pub halts_on_falsey: bool,

    /// Method names appended in order
    #[serde(default)]
    pub callbacks: Vec<String>,
}

impl HookDeclaration {
    pub fn new(name: impl Into<HookName>) -> Self {
        Self {
            name: name.into(),
            halts_on_falsey: false,
            callbacks: Vec::new(),
        }
    }

    pub fn with_halts_on_falsey(mut self, halts: bool) -> Self {
        self.halts_on_falsey = halts;
        self
    }

    pub fn with_callback(mut self, method: impl Into<String>) -> Self {
        self.callbacks.push(method.into());
        self
    }
}

/// Configuration structure for hooks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HooksConfig {
    /// Hooks in declaration order
    #[serde(default)]
    pub hooks: Vec<HookDeclaration>,
}

impl HooksConfig {
    /// Parse a TOML document with `[[hooks]]` tables
    pub fn from_toml_str(content: &str) -> HookResult<Self> {
        toml::from_str(content)
            .map_err(|e| HookError::config(format!("Failed to parse TOML hooks config: {}", e)))
    }

    /// Parse a JSON document with a `hooks` array
    pub fn from_json_str(content: &str) -> HookResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| HookError::config(format!("Failed to parse JSON hooks config: {}", e)))
    }

    /// Get a declaration by hook name
    pub fn get(&self, name: impl Into<HookName>) -> Option<&HookDeclaration> {
        let name = name.into();
        self.hooks.iter().find(|declaration| declaration.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml() {
        let config = HooksConfig::from_toml_str(
            r#"
[[hooks]]
name = "before_eating"
halts_on_falsey = true
callbacks = ["wash_hands", "locate_food"]

[[hooks]]
name = "after_eating"
"#,
        )
        .unwrap();

        assert_eq!(config.hooks.len(), 2);
        let before = config.get("before_eating").unwrap();
        assert!(before.halts_on_falsey);
        assert_eq!(before.callbacks, vec!["wash_hands", "locate_food"]);

        let after = config.get("after_eating").unwrap();
        assert!(!after.halts_on_falsey);
        assert!(after.callbacks.is_empty());
    }

    #[test]
    fn test_from_json() {
        let config = HooksConfig::from_json_str(
            r#"{"hooks": [{"name": "after_eight", "callbacks": ["dine"]}]}"#,
        )
        .unwrap();

        assert_eq!(
            config,
            HooksConfig {
                hooks: vec![HookDeclaration::new("after_eight").with_callback("dine")],
            }
        );
    }

    #[test]
    fn test_invalid_config() {
        let err = HooksConfig::from_toml_str("[[hooks]]\nhalts_on_falsey = true").unwrap_err();
        assert_eq!(err.error_code(), "HOOK_CONFIG");

        assert!(HooksConfig::from_json_str("{\"hooks\": 3}").is_err());
    }

    #[test]
    fn test_empty_document() {
        assert!(HooksConfig::from_toml_str("").unwrap().is_empty());
    }
}
