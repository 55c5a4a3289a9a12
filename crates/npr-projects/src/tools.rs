//! Built-in setup tools
//!
//! Each constructor returns a fresh [`Tool`]; callers assemble the list for a
//! single invocation, usually through [`ToolCatalog::resolve`].

use crate::error::{Error, Result};
use npr_core::Tool;

/// Poetry: creates the project directory and Python package skeleton
pub fn poetry() -> Tool {
    Tool::new("poetry", "poetry new {{ project.name }}")
        .creates_project_folder()
        .with_exclusions([
            "__pycache__/",
            "*.py[cod]",
            ".venv/",
            "dist/",
            "*.egg-info/",
            ".pytest_cache/",
        ])
        .with_template_source("project")
}

/// Git: initializes version control in the project directory
pub fn git() -> Tool {
    Tool::new("git", "git init")
}

/// DVC: initializes data versioning in the project directory
pub fn dvc() -> Tool {
    Tool::new("dvc", "dvc init").with_exclusions(["/data/", "/models/"])
}

/// Conda: creates a project-local environment pinned to the project's Python version
pub fn conda() -> Tool {
    Tool::new(
        "conda",
        "conda create --yes --quiet --prefix .conda python={{ project.python_version }}",
    )
    .with_exclusions([".conda/"])
}

/// Named collection of the built-in tools
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    tools: Vec<Tool>,
}

impl ToolCatalog {
    /// Catalog of every built-in tool
    pub fn builtin() -> Self {
        Self {
            tools: vec![poetry(), git(), dvc(), conda()],
        }
    }

    /// Names of all tools in the catalog
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(Tool::name).collect()
    }

    /// Look up a tool by name
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.name() == name)
    }

    /// Build the ordered tool list for one invocation.
    ///
    /// Fails on an unknown name, and when a tool that creates the project
    /// directory is not the first entry or appears more than once.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Tool>> {
        let tools = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name)
                    .cloned()
                    .ok_or_else(|| Error::unknown_tool(name, self.names().join(", ")))
            })
            .collect::<Result<Vec<_>>>()?;

        validate_order(&tools)?;
        Ok(tools)
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_order(tools: &[Tool]) -> Result<()> {
    let creators: Vec<(usize, &Tool)> = tools
        .iter()
        .enumerate()
        .filter(|(_, tool)| !tool.runs_inside_project_folder())
        .collect();

    if creators.len() > 1 {
        let names: Vec<&str> = creators.iter().map(|(_, tool)| tool.name()).collect();
        return Err(Error::invalid_tool_order(format!(
            "only one tool may create the project directory, found: {}",
            names.join(", ")
        )));
    }

    if let Some((index, tool)) = creators.first() {
        if *index != 0 {
            return Err(Error::invalid_tool_order(format!(
                "'{}' creates the project directory and must run first",
                tool.name()
            )));
        }
    }

    Ok(())
}
