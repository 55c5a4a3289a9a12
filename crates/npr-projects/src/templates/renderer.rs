//! Template rendering with Tera for variable substitution.
//!
//! Handles:
//! - Loading a named template file from a template directory
//! - Rendering tool commands against the same project context
//!
//! Auto-escaping is disabled: every output is plain text (Markdown, Makefile,
//! shell commands), so substituted values are inserted literally.

use crate::error::{Error, Result};
use camino::Utf8Path;
use npr_core::{Project, Tool};
use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

#[derive(Serialize)]
struct TemplateContext<'a> {
    project: &'a Project,
}

/// Build the render context for a project, binding it as `project`
pub fn project_context(project: &Project) -> Result<Context> {
    Ok(Context::from_serialize(TemplateContext { project })?)
}

/// Template renderer
#[derive(Debug, Default)]
pub struct TemplateRenderer;

impl TemplateRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Render the template `template_name` found in `template_dir`
    ///
    /// # Errors
    /// - `TemplateNotFound` if `template_dir/template_name` is not a file
    /// - `TemplateRead` if the file cannot be read as UTF-8 text
    /// - `TemplateRender` if the template is malformed or references an
    ///   undefined variable
    pub fn render(
        &self,
        template_dir: &Utf8Path,
        template_name: &str,
        context: &Context,
    ) -> Result<String> {
        let template_path = template_dir.join(template_name);
        if !template_path.is_file() {
            return Err(Error::template_not_found(
                template_name,
                template_dir.as_str(),
            ));
        }

        debug!("Rendering template: {}", template_path);
        let source = std::fs::read_to_string(&template_path)
            .map_err(|e| Error::template_read(template_path.as_str(), e))?;
        self.render_str(template_name, &source, context)
    }

    /// Render an in-memory template string
    pub fn render_str(&self, name: &str, source: &str, context: &Context) -> Result<String> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_template(name, source)
            .and_then(|_| tera.render(name, context))
            .map_err(|source| Error::TemplateRender {
                template: name.to_string(),
                source,
            })
    }

    /// Resolve a tool's command template against the project context
    pub fn render_command(&self, tool: &Tool, context: &Context) -> Result<String> {
        let name = format!("{}.command", tool.name());
        self.render_str(&name, tool.init_command(), context)
            .map(|command| command.trim().to_string())
            .map_err(|err| match err {
                Error::TemplateRender { source, .. } => Error::CommandTemplate {
                    tool: tool.name().to_string(),
                    source,
                },
                other => other,
            })
    }
}
