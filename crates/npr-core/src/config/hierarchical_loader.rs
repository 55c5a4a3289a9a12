//! Hierarchical configuration loader with precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Embedded defaults (built into binary)
//! 2. Global config (~/.npr/config.yaml), or an explicit file passed by the caller
//! 3. Environment variables (NPR_* prefix)
//! 4. CLI flags (handled by caller)

use crate::error::{Error, Result};
use crate::types::RuntimeConfig;
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;
use std::env;
use std::fs;
use tracing::debug;

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

const GLOBAL_CONFIG_FILE: &str = "config.yaml";

/// Configuration hierarchy loader
pub struct HierarchicalConfigLoader {
    /// Base directory for configuration files
    config_dir: Utf8PathBuf,
}

impl HierarchicalConfigLoader {
    /// Create a loader rooted at the standard config directory (~/.npr)
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;
        Ok(Self { config_dir })
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self { config_dir }
    }

    fn get_config_dir() -> Result<Utf8PathBuf> {
        let home = crate::utils::get_home_dir()?;
        let home = Utf8PathBuf::from_path_buf(home).map_err(|p| {
            Error::invalid_config(format!("Home directory is not valid UTF-8: {}", p.display()))
        })?;
        Ok(home.join(".npr"))
    }

    /// Load runtime configuration with hierarchical precedence
    pub fn load_runtime_config(&self) -> Result<RuntimeConfig> {
        self.load_with_override(None)
    }

    /// Load runtime configuration, reading `override_file` instead of the
    /// global config file when given. An explicit file must exist.
    pub fn load_with_override(&self, override_file: Option<&Utf8Path>) -> Result<RuntimeConfig> {
        let mut config = Self::load_embedded_config::<RuntimeConfig>("defaults.yaml")?;

        match override_file {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::config_not_found(path.as_str()));
                }
                let file_config = self.load_yaml_file::<RuntimeConfig>(path)?;
                config = Self::merge_runtime_config(config, file_config);
            }
            None => {
                let global_path = self.config_dir.join(GLOBAL_CONFIG_FILE);
                if global_path.exists() {
                    let file_config = self.load_yaml_file::<RuntimeConfig>(&global_path)?;
                    config = Self::merge_runtime_config(config, file_config);
                }
            }
        }

        Self::apply_env_overrides(config)
    }

    /// Load an embedded configuration file
    fn load_embedded_config<T: DeserializeOwned>(filename: &str) -> Result<T> {
        let embedded_file = EmbeddedConfigs::get(filename).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", filename))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", filename))
        })?;

        serde_yaml_ng::from_str(content).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to parse embedded config {}: {}",
                filename, e
            ))
        })
    }

    /// Load a YAML file and parse it
    fn load_yaml_file<T: DeserializeOwned>(&self, path: &Utf8Path) -> Result<T> {
        debug!("Loading config file: {}", path);
        let content =
            fs::read_to_string(path).map_err(|e| Error::config_read(path.as_str(), e))?;
        serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))
    }

    /// Merge two runtime configs (base is overridden by overlay)
    fn merge_runtime_config(base: RuntimeConfig, overlay: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            project: overlay.project,
            tools: overlay.tools,
            templates: crate::types::TemplatesConfig {
                root: overlay.templates.root.or(base.templates.root),
            },
        }
    }

    /// Apply environment variable overrides to runtime config
    fn apply_env_overrides(mut config: RuntimeConfig) -> Result<RuntimeConfig> {
        if let Ok(val) = env::var("NPR_PYTHON_VERSION") {
            if val.trim().is_empty() {
                return Err(Error::invalid_config("NPR_PYTHON_VERSION cannot be empty"));
            }
            config.project.python_version = val.trim().to_string();
        }

        if let Ok(val) = env::var("NPR_TOOLS") {
            config.tools.enabled = val
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect();
        }

        if let Ok(val) = env::var("NPR_TEMPLATE_DIR") {
            if !val.is_empty() {
                config.templates.root = Some(Utf8PathBuf::from(val));
            }
        }

        Ok(config)
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn create_temp_loader() -> (HierarchicalConfigLoader, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_dir =
            Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).expect("Invalid UTF-8 path");
        let loader = HierarchicalConfigLoader::with_dir(config_dir);
        (loader, temp_dir)
    }

    #[test]
    #[serial]
    fn test_load_runtime_config_defaults() {
        let (loader, _temp) = create_temp_loader();
        let config = loader.load_runtime_config().unwrap();
        assert_eq!(config.project.default_name, "my-project");
        assert_eq!(config.project.python_version, "3.11");
        assert_eq!(config.tools.enabled, vec!["poetry", "git", "dvc"]);
    }

    #[test]
    #[serial]
    fn test_load_runtime_config_from_file() {
        let (loader, _temp) = create_temp_loader();

        let config_content = r#"
project:
  default-name: analysis
  python-version: "3.10"
tools:
  enabled: [poetry, git]
"#;
        fs::write(loader.config_dir().join("config.yaml"), config_content).unwrap();

        let config = loader.load_runtime_config().unwrap();
        assert_eq!(config.project.default_name, "analysis");
        assert_eq!(config.project.python_version, "3.10");
        assert_eq!(config.tools.enabled, vec!["poetry", "git"]);
    }

    #[test]
    #[serial]
    fn test_override_file_replaces_global_file() {
        let (loader, temp) = create_temp_loader();
        fs::write(
            loader.config_dir().join("config.yaml"),
            "project:\n  default-name: from-global\n",
        )
        .unwrap();

        let explicit = Utf8PathBuf::from_path_buf(temp.path().join("explicit.yaml")).unwrap();
        fs::write(&explicit, "project:\n  default-name: from-explicit\n").unwrap();

        let config = loader.load_with_override(Some(&explicit)).unwrap();
        assert_eq!(config.project.default_name, "from-explicit");
    }

    #[test]
    #[serial]
    fn test_missing_override_file_is_an_error() {
        let (loader, temp) = create_temp_loader();
        let missing = Utf8PathBuf::from_path_buf(temp.path().join("nope.yaml")).unwrap();

        let err = loader.load_with_override(Some(&missing)).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    #[serial]
    fn test_malformed_file_names_the_file() {
        let (loader, _temp) = create_temp_loader();
        fs::write(loader.config_dir().join("config.yaml"), "tools: [unclosed").unwrap();

        let err = loader.load_runtime_config().unwrap_err();
        assert!(err.to_string().contains("config.yaml"));
    }

    #[test]
    #[serial]
    fn test_unreadable_file_names_the_file() {
        let (loader, _temp) = create_temp_loader();
        let path = loader.config_dir().join("config.yaml");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = loader.load_runtime_config().unwrap_err();
        match err {
            Error::ConfigRead { path: reported, .. } => assert_eq!(reported, path.as_str()),
            other => panic!("expected ConfigRead, got {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        let (loader, _temp) = create_temp_loader();

        env::set_var("NPR_PYTHON_VERSION", "3.13");
        env::set_var("NPR_TOOLS", "poetry, git ,,conda");
        env::set_var("NPR_TEMPLATE_DIR", "/srv/templates");

        let config = loader.load_runtime_config();

        env::remove_var("NPR_PYTHON_VERSION");
        env::remove_var("NPR_TOOLS");
        env::remove_var("NPR_TEMPLATE_DIR");

        let config = config.unwrap();
        assert_eq!(config.project.python_version, "3.13");
        assert_eq!(config.tools.enabled, vec!["poetry", "git", "conda"]);
        assert_eq!(
            config.templates.root,
            Some(Utf8PathBuf::from("/srv/templates"))
        );
    }

    #[test]
    fn test_merge_keeps_base_template_root() {
        let mut base = RuntimeConfig::default();
        base.templates.root = Some(Utf8PathBuf::from("/base"));
        let mut overlay = RuntimeConfig::default();
        overlay.project.python_version = "3.9".to_string();

        let merged = HierarchicalConfigLoader::merge_runtime_config(base, overlay);
        assert_eq!(merged.project.python_version, "3.9");
        assert_eq!(merged.templates.root, Some(Utf8PathBuf::from("/base")));
    }
}
