//! # npr-projects
//!
//! Project initialization for the npr CLI:
//! - A catalog of external setup tools (poetry, git, dvc, conda)
//! - Shell command execution behind the [`CommandRunner`] trait
//! - Tera-based rendering of commands and metadata templates
//! - The [`Orchestrator`] that runs tools in order and writes `.gitignore`,
//!   `README.md` and `Makefile`
//!
//! # Example
//!
//! ```no_run
//! use npr_core::Project;
//! use npr_projects::{resolve_installed_template_root, Orchestrator, ShellRunner, ToolCatalog};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tools = ToolCatalog::builtin().resolve(&["poetry", "git"])?;
//! let project = Project::new("/tmp", "demo")?
//!     .with_title("Demo Project")
//!     .with_tools(tools);
//!
//! let template_root = resolve_installed_template_root(None)?;
//! let orchestrator = Orchestrator::new(ShellRunner::new(), template_root);
//! orchestrator.initialize(project).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod orchestrator;
pub mod runner;
pub mod templates;
pub mod tools;

pub use error::{CommandError, Error, Result};
pub use orchestrator::{InitReport, Orchestrator};
pub use runner::{CommandRunner, ShellRunner};
pub use templates::{
    project_context, resolve_installed_template_root, TemplateRenderer, TemplateRootResolver,
};
pub use tools::ToolCatalog;
