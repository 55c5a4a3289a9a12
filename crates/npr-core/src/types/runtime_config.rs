//! Runtime configuration types
//!
//! Defaults come from the embedded `defaults.yaml`; users override them in
//! `~/.npr/config.yaml` or through `NPR_*` environment variables.

use super::project::DEFAULT_PYTHON_VERSION;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Complete runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuntimeConfig {
    /// Defaults applied to new projects
    #[serde(default)]
    pub project: ProjectDefaults,

    /// Setup tools to run
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Template asset location
    #[serde(default)]
    pub templates: TemplatesConfig,
}

/// Defaults applied to new projects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectDefaults {
    /// Name offered at the prompt
    #[serde(default = "default_project_name")]
    pub default_name: String,

    /// Python version recorded in generated metadata
    #[serde(default = "default_python_version")]
    pub python_version: String,
}

impl Default for ProjectDefaults {
    fn default() -> Self {
        Self {
            default_name: default_project_name(),
            python_version: default_python_version(),
        }
    }
}

fn default_project_name() -> String {
    "my-project".to_string()
}
fn default_python_version() -> String {
    DEFAULT_PYTHON_VERSION.to_string()
}

/// Setup tool selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ToolsConfig {
    /// Tool names in execution order. The directory-creating tool goes first.
    #[serde(default = "default_enabled_tools")]
    pub enabled: Vec<String>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled_tools(),
        }
    }
}

fn default_enabled_tools() -> Vec<String> {
    vec!["poetry".to_string(), "git".to_string(), "dvc".to_string()]
}

/// Template asset location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TemplatesConfig {
    /// Explicit template root; skips installed-location discovery when set
    #[serde(default)]
    pub root: Option<Utf8PathBuf>,
}
