//! External setup tool definitions

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// One external setup step run while initializing a project
///
/// A tool is immutable once built. The `init_command` is a template that is
/// rendered against the project before it runs (for example
/// `poetry new {{ project.name }}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    name: String,
    init_command: String,
    runs_inside_project_folder: bool,
    exclusion_entries: Vec<String>,
    template_source_directory: Option<Utf8PathBuf>,
}

impl Tool {
    /// Create a tool that runs inside the project directory and contributes
    /// no exclusion entries
    pub fn new(name: impl Into<String>, init_command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            init_command: init_command.into(),
            runs_inside_project_folder: true,
            exclusion_entries: Vec::new(),
            template_source_directory: None,
        }
    }

    /// Mark this tool as the one that creates the project directory.
    ///
    /// Its command runs in the parent path and must leave `path/name` behind.
    pub fn creates_project_folder(mut self) -> Self {
        self.runs_inside_project_folder = false;
        self
    }

    /// Set the exclusion entries this tool contributes to `.gitignore`
    pub fn with_exclusions<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclusion_entries = entries.into_iter().map(Into::into).collect();
        self
    }

    /// Set the directory (relative to the template root) holding this tool's assets
    pub fn with_template_source(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.template_source_directory = Some(dir.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn init_command(&self) -> &str {
        &self.init_command
    }

    pub fn runs_inside_project_folder(&self) -> bool {
        self.runs_inside_project_folder
    }

    pub fn exclusion_entries(&self) -> &[String] {
        &self.exclusion_entries
    }

    pub fn template_source_directory(&self) -> Option<&Utf8Path> {
        self.template_source_directory.as_deref()
    }

    /// Whether running this tool is a no-op (blank command)
    pub fn is_noop(&self) -> bool {
        self.init_command.trim().is_empty()
    }
}
