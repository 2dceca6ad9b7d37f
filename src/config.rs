//! Configuration handling for chainsmith.
//! Loads `chainsmith.json`, `chainsmith.yml` or `chainsmith.yaml` from a project
//! directory. The resulting value is passed explicitly to whatever builds the
//! render and write capabilities.

use crate::constants::{CONFIG_FILES, DEFAULT_TEMPLATES_DIR};
use crate::error::{Error, Result};
use crate::processor::Context;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Project configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root the template identifiers are resolved against
    pub templates_dir: PathBuf,
    /// Variables available to every template
    pub context: Context,
}

impl Default for Config {
    fn default() -> Self {
        Self { templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR), context: Context::new() }
    }
}

/// Deserializes `content` as JSON, falling back to YAML.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither
pub fn parse_json_or_yaml<T: DeserializeOwned>(content: &str) -> Result<T> {
    match serde_json::from_str(content) {
        Ok(v) => Ok(v),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Returns the first configuration file present in `project_dir`.
pub fn find_config<P: AsRef<Path>>(project_dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|file| project_dir.as_ref().join(file))
        .find(|path| path.is_file())
}

/// Loads the configuration of `project_dir`.
///
/// A missing file yields [`Config::default`]. A relative `templates_dir` is
/// resolved against `project_dir`.
///
/// # Errors
/// * `Error::IoError` if the file cannot be read
/// * `Error::ConfigError` if it cannot be parsed
pub fn get_config<P: AsRef<Path>>(project_dir: P) -> Result<Config> {
    let project_dir = project_dir.as_ref();
    let mut config = match find_config(project_dir) {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            let content = std::fs::read_to_string(&path).map_err(Error::IoError)?;
            parse_json_or_yaml::<Config>(&content)?
        }
        None => {
            debug!("No configuration file found (tried: {})", CONFIG_FILES.join(", "));
            Config::default()
        }
    };

    if config.templates_dir.is_relative() {
        config.templates_dir = project_dir.join(&config.templates_dir);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_defaults() {
        let dir = TempDir::new().unwrap();
        let config = get_config(dir.path()).unwrap();
        assert_eq!(config.templates_dir, dir.path().join(DEFAULT_TEMPLATES_DIR));
        assert!(config.context.is_empty());
    }

    #[test]
    fn test_json_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("chainsmith.json"),
            r#"{"templates_dir": "tpl", "context": {"b": 1, "a": "x"}}"#,
        )
        .unwrap();

        let config = get_config(dir.path()).unwrap();
        assert_eq!(config.templates_dir, dir.path().join("tpl"));
        assert_eq!(config.context.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(config.context["a"], json!("x"));
    }

    #[test]
    fn test_yaml_config_with_absolute_dir() {
        let dir = TempDir::new().unwrap();
        let templates = dir.path().join("shared");
        fs::write(
            dir.path().join("chainsmith.yml"),
            format!("templates_dir: {}\ncontext:\n  name: post\n", templates.display()),
        )
        .unwrap();

        let config = get_config(dir.path()).unwrap();
        assert_eq!(config.templates_dir, templates);
        assert_eq!(config.context["name"], json!("post"));
    }

    #[test]
    fn test_invalid_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("chainsmith.yaml"), "templates_dir: [unclosed").unwrap();
        assert!(matches!(get_config(dir.path()), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = parse_json_or_yaml::<Config>(r#"{"track_templates": true}"#);
        assert!(result.is_err());
    }
}
