//! Type definitions for npr projects, tools, and configuration

mod project;
mod runtime_config;
mod tool;

pub use project::{validate_project_name, Project, DEFAULT_PYTHON_VERSION};
pub use runtime_config::{ProjectDefaults, RuntimeConfig, TemplatesConfig, ToolsConfig};
pub use tool::Tool;
