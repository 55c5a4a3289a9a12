//! Project initialization pipeline.
//!
//! Runs each setup tool in list order, then writes `.gitignore`, `README.md`
//! and `Makefile` into the project directory. The first failure aborts the
//! rest of the pipeline; nothing already on disk is rolled back.

use crate::error::{Error, Result};
use crate::runner::CommandRunner;
use crate::templates::{project_context, TemplateRenderer, PROJECT_TEMPLATE_DIR};
use camino::{Utf8Path, Utf8PathBuf};
use npr_core::types::validate_project_name;
use npr_core::{Project, Tool};
use tera::Context;
use tracing::{debug, info};

/// Aggregate exclusion file written into the project directory
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Metadata templates rendered into the project directory, in write order
pub const METADATA_TEMPLATES: [&str; 2] = ["README.md", "Makefile"];

/// Outcome of a successful initialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub project_dir: Utf8PathBuf,
    /// Tools whose command ran (blank commands excluded)
    pub tools_run: Vec<String>,
    /// Files written, in write order
    pub files_written: Vec<Utf8PathBuf>,
}

/// Sequences tool initialization and metadata generation for one project
pub struct Orchestrator<R> {
    runner: R,
    renderer: TemplateRenderer,
    template_root: Utf8PathBuf,
}

impl<R: CommandRunner> Orchestrator<R> {
    /// Create an orchestrator that runs commands with `runner` and reads
    /// metadata templates from `template_root/project`
    pub fn new(runner: R, template_root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            runner,
            renderer: TemplateRenderer::new(),
            template_root: template_root.into(),
        }
    }

    /// Initialize `project`.
    ///
    /// # Errors
    /// - `Core` if the project name is not usable in a tool command
    /// - `ToolExecution` / `CommandTemplate` for the first failing tool; later
    ///   tools do not run and no file is written
    /// - `FileWrite` if `.gitignore` or a metadata file cannot be written
    /// - `TemplateNotFound` / `TemplateRender` for a metadata template, after
    ///   `.gitignore` has been written
    pub async fn initialize(&self, project: Project) -> Result<InitReport> {
        validate_project_name(&project.name)?;
        let project_dir = project.project_dir();
        info!("Initializing project '{}' at {}", project.name, project_dir);

        let exclusions = project.exclusion_entries();
        let context = project_context(&project)?;

        let mut tools_run = Vec::new();
        for tool in &project.tools {
            if self.run_tool(&project, tool, &context).await? {
                tools_run.push(tool.name().to_string());
            }
        }

        let mut files_written = Vec::new();

        let gitignore = project_dir.join(GITIGNORE_FILE);
        write_file(&gitignore, &exclusions.join("\n")).await?;
        debug!("Wrote {} exclusion entries", exclusions.len());
        files_written.push(gitignore);

        let template_dir = self.template_root.join(PROJECT_TEMPLATE_DIR);
        for template_name in METADATA_TEMPLATES {
            let content = self
                .renderer
                .render(&template_dir, template_name, &context)?;
            let target = project_dir.join(template_name);
            write_file(&target, &content).await?;
            files_written.push(target);
        }

        info!("Project '{}' initialized", project.name);
        Ok(InitReport {
            project_dir,
            tools_run,
            files_written,
        })
    }

    /// Run one tool. Returns `false` when the tool had nothing to run.
    async fn run_tool(&self, project: &Project, tool: &Tool, context: &Context) -> Result<bool> {
        if tool.is_noop() {
            debug!("Tool '{}' has no command, skipping", tool.name());
            return Ok(false);
        }

        let command = self.renderer.render_command(tool, context)?;
        if command.is_empty() {
            debug!("Tool '{}' rendered to an empty command, skipping", tool.name());
            return Ok(false);
        }

        let working_dir = project.working_dir_for(tool);
        info!("Running {} in {}", tool.name(), working_dir);
        debug!("Resolved command: {}", command);

        self.runner
            .run(&command, &working_dir)
            .await
            .map_err(|source| Error::tool_execution(tool.name(), source))?;

        Ok(true)
    }
}

/// Create or truncate `path` with `content`
async fn write_file(path: &Utf8Path, content: &str) -> Result<()> {
    tokio::fs::write(path, content)
        .await
        .map_err(|source| Error::file_write(path.as_str(), source))
}
