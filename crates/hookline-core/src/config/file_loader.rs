//! File-based hook configuration loading

use std::fs;
use std::path::Path;

use super::hooks_config::HooksConfig;
use crate::error::{HookError, HookResult};

/// Load hook declarations from a file
///
/// `.toml` files are parsed as TOML, everything else as JSON.
/// Returns an empty config if the file doesn't exist.
pub fn load_from_file(path: &Path) -> HookResult<HooksConfig> {
    if !path.exists() {
        return Ok(HooksConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        HookError::config_with_context(
            format!("Failed to read hooks config file: {}", e),
            format!("Reading hooks configuration from '{}'", path.display()),
        )
    })?;

    let parsed = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => HooksConfig::from_toml_str(&content),
        _ => HooksConfig::from_json_str(&content),
    };

    parsed.map_err(|e| {
        HookError::config_with_context(
            e.to_string(),
            format!("Deserializing hooks configuration from '{}'", path.display()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("hooks.toml");
        fs::write(
            &config_path,
            r#"
[[hooks]]
name = "after_eight"
callbacks = ["dine"]
"#,
        )
        .unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert_eq!(config.hooks.len(), 1);
        assert_eq!(config.hooks[0].callbacks, vec!["dine"]);
    }

    #[test]
    fn test_load_from_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("hooks.json");
        fs::write(
            &config_path,
            r#"{"hooks": [{"name": "after_eight", "halts_on_falsey": true}]}"#,
        )
        .unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert!(config.hooks[0].halts_on_falsey);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_from_file(&temp_dir.path().join("absent.toml")).unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn test_parse_error_has_context() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("hooks.toml");
        fs::write(&config_path, "hooks = 5").unwrap();

        let err = load_from_file(&config_path).unwrap_err();
        assert_eq!(err.error_code(), "HOOK_CONFIG");
        assert!(err.context().unwrap().contains("hooks.toml"));
    }
}
