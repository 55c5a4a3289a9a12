//! Project model consumed by the orchestrator and the template renderer

use super::tool::Tool;
use crate::error::{Error, Result};
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Python version written into generated metadata when none is configured
pub const DEFAULT_PYTHON_VERSION: &str = "3.11";

/// Identity and metadata of the project being scaffolded
///
/// Built once per invocation and handed to the orchestrator by value.
/// Every field is available to command and file templates as `project.<field>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Parent directory the project directory is created under
    pub path: Utf8PathBuf,
    /// Directory name and identifier
    pub name: String,
    pub title: String,
    pub description: String,
    pub authors: Vec<String>,
    /// Target Python version for the generated environment
    pub python_version: String,
    /// Setup tools, run in this order
    pub tools: Vec<Tool>,
}

impl Project {
    /// Create a project with the given parent path and name.
    ///
    /// The title defaults to the name; description, authors and tools start empty.
    pub fn new(path: impl Into<Utf8PathBuf>, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_project_name(&name)?;

        Ok(Self {
            path: path.into(),
            title: name.clone(),
            name,
            description: String::new(),
            authors: Vec::new(),
            python_version: DEFAULT_PYTHON_VERSION.to_string(),
            tools: Vec::new(),
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_python_version(mut self, version: impl Into<String>) -> Self {
        self.python_version = version.into();
        self
    }

    pub fn with_tools(mut self, tools: Vec<Tool>) -> Self {
        self.tools = tools;
        self
    }

    /// The project directory, `path/name`
    pub fn project_dir(&self) -> Utf8PathBuf {
        self.path.join(&self.name)
    }

    /// Working directory a tool's command runs in
    pub fn working_dir_for(&self, tool: &Tool) -> Utf8PathBuf {
        if tool.runs_inside_project_folder() {
            self.project_dir()
        } else {
            self.path.clone()
        }
    }

    /// Exclusion entries of every tool, in tool order then entry order.
    ///
    /// Duplicates are kept.
    pub fn exclusion_entries(&self) -> Vec<String> {
        self.tools
            .iter()
            .flat_map(|tool| tool.exclusion_entries().iter().cloned())
            .collect()
    }
}

/// Check that a project name can be used as a single directory component
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::invalid_project_name(name, "name cannot be empty"));
    }

    if name == "." || name == ".." {
        return Err(Error::invalid_project_name(
            name,
            "name cannot refer to the current or parent directory",
        ));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::invalid_project_name(
            name,
            "name cannot contain path separators",
        ));
    }

    if name.starts_with('-') {
        return Err(Error::invalid_project_name(name, "name cannot start with '-'"));
    }

    // The name is substituted into shell commands unquoted
    if let Some(c) = name.chars().find(|c| !is_name_char(*c)) {
        let reason = if c.is_whitespace() {
            "name cannot contain whitespace".to_string()
        } else {
            format!("name cannot contain '{}'", c)
        };
        return Err(Error::invalid_project_name(name, reason));
    }

    Ok(())
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.')
}
