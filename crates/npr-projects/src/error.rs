//! Error types for npr-projects

use thiserror::Error;

/// Result type alias using npr-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project initialization error types
#[derive(Error, Debug)]
pub enum Error {
    /// A setup tool's command failed; no later tool ran and no file was written
    #[error("Tool '{tool}' failed: {source}")]
    ToolExecution {
        tool: String,
        #[source]
        source: CommandError,
    },

    /// A setup tool's command template could not be rendered
    #[error("Failed to render command for tool '{tool}'")]
    CommandTemplate {
        tool: String,
        #[source]
        source: tera::Error,
    },

    /// Template not found in the template directory
    #[error("Template not found: {template} (in {directory})")]
    TemplateNotFound { template: String, directory: String },

    /// No usable template root
    #[error("Project templates are missing. Searched: {searched}")]
    TemplatesMissing { searched: String },

    /// Reading a template file failed
    #[error("Failed to read template {path}")]
    TemplateRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Template rendering error
    #[error("Failed to render template: {template}")]
    TemplateRender {
        template: String,
        #[source]
        source: tera::Error,
    },

    /// Writing a generated file failed
    #[error("Failed to write {path}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Project already exists
    #[error("Project already exists at: {path}")]
    ProjectExists { path: String },

    /// Unknown setup tool
    #[error("Unknown tool: {name}. Available tools: {available}")]
    UnknownTool { name: String, available: String },

    /// Tool list cannot produce a project directory in a sane order
    #[error("Invalid tool order: {message}")]
    InvalidToolOrder { message: String },

    /// Interactive input was cancelled
    #[error("Aborted by user")]
    UserAbort,

    /// Invalid project descriptor
    #[error(transparent)]
    Core(#[from] npr_core::Error),

    /// Template error from Tera
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a tool execution error
    pub fn tool_execution(tool: impl Into<String>, source: CommandError) -> Self {
        Self::ToolExecution {
            tool: tool.into(),
            source,
        }
    }

    /// Create a template not found error
    pub fn template_not_found(template: impl Into<String>, directory: impl Into<String>) -> Self {
        Self::TemplateNotFound {
            template: template.into(),
            directory: directory.into(),
        }
    }

    /// Create a template read error
    pub fn template_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::TemplateRead {
            path: path.into(),
            source,
        }
    }

    /// Create a file write error
    pub fn file_write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a project exists error
    pub fn project_exists(path: impl Into<String>) -> Self {
        Self::ProjectExists { path: path.into() }
    }

    /// Create an unknown tool error
    pub fn unknown_tool(name: impl Into<String>, available: impl Into<String>) -> Self {
        Self::UnknownTool {
            name: name.into(),
            available: available.into(),
        }
    }

    /// Create an invalid tool order error
    pub fn invalid_tool_order(message: impl Into<String>) -> Self {
        Self::InvalidToolOrder {
            message: message.into(),
        }
    }

    /// Name of the failing tool, when the error came from a tool step
    pub fn failed_tool(&self) -> Option<&str> {
        match self {
            Self::ToolExecution { tool, .. } | Self::CommandTemplate { tool, .. } => Some(tool),
            _ => None,
        }
    }
}

/// Failure of a single external command
#[derive(Error, Debug)]
pub enum CommandError {
    /// The process could not be started (missing shell, missing working directory, ...)
    #[error("could not run `{command}` in {working_dir}: {source}")]
    Spawn {
        command: String,
        working_dir: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran and reported failure
    #[error("`{command}` exited with {status}{}", stderr_suffix(.stderr))]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}
