//! Metadata templates for new projects.
//!
//! Templates are plain files under a template root:
//!
//! ```text
//! <root>/
//!   project/
//!     README.md
//!     Makefile
//! ```
//!
//! They are rendered with Tera. The same context is used for tool commands,
//! so `{{ project.name }}` means the same thing in a command and in a file.
//! Every [`Project`](npr_core::Project) field is available under `project`:
//!
//! ```text
//! # {{ project.title }}
//! {% for author in project.authors %}- {{ author }}
//! {% endfor %}
//! ```
//!
//! - `renderer`: load a named template from a directory and render it
//! - `root`: locate the installed template root

pub mod renderer;
pub mod root;

pub use renderer::{project_context, TemplateRenderer};
pub use root::{resolve_installed_template_root, TemplateRootResolver, PROJECT_TEMPLATE_DIR};
