//! `npr` project initialization command

use anyhow::{Context, Result};
use camino::Utf8Path;
use console::style;
use npr_core::{HierarchicalConfigLoader, Project, RuntimeConfig};
use npr_projects::{resolve_installed_template_root, Orchestrator, ShellRunner, ToolCatalog};

use crate::cli::InitArgs;
use crate::output;
use crate::prompts::{self, ProjectAnswers};

/// Create a new project
pub async fn run(args: InitArgs, config_file: Option<&Utf8Path>) -> Result<()> {
    let config = HierarchicalConfigLoader::new()
        .and_then(|loader| loader.load_with_override(config_file))
        .context("Failed to load configuration")?;

    let interactive = prompts::can_prompt(&args);
    if interactive {
        output::welcome();
    }

    let answers = prompts::collect(&args, &config.project.default_name, interactive)?;
    let project = build_project(&args, answers, &config)?;
    let project_dir = project.project_dir();

    if project_dir.exists() {
        return Err(npr_projects::Error::project_exists(project_dir.as_str()).into());
    }

    let template_root = resolve_installed_template_root(config.templates.root.as_deref())?;
    tracing::debug!("Template root: {}", template_root);

    if !interactive {
        output::kv("Project", &project.name);
        output::kv("Location", project_dir.as_str());
    }

    let project_name = project.name.clone();
    let spinner = output::spinner("Creating project...");
    let result = Orchestrator::new(ShellRunner::new(), template_root)
        .initialize(project)
        .await;
    spinner.finish_and_clear();

    let report = result.with_context(|| format!("Failed to initialize '{}'", project_name))?;

    println!();
    output::success(&format!(
        "Project created at {}",
        style(report.project_dir.as_str()).cyan()
    ));
    if !report.tools_run.is_empty() {
        output::info(&format!("Initialized: {}", report.tools_run.join(", ")));
    }
    output::next_steps(&project_name);

    Ok(())
}

/// Assemble the project from answers, flags and configuration.
///
/// Flags win over configuration for the tool list and Python version.
fn build_project(
    args: &InitArgs,
    answers: ProjectAnswers,
    config: &RuntimeConfig,
) -> Result<Project> {
    let tool_names: Vec<String> = match &args.tools {
        Some(names) => names
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect(),
        None => config.tools.enabled.clone(),
    };
    let tools = ToolCatalog::builtin().resolve(tool_names.as_slice())?;

    let python_version = args
        .python_version
        .clone()
        .unwrap_or_else(|| config.project.python_version.clone());

    let project = Project::new(args.path.clone(), answers.name)?
        .with_title(answers.title)
        .with_description(answers.description)
        .with_authors(answers.authors)
        .with_python_version(python_version)
        .with_tools(tools);

    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use npr_core::Tool;

    fn answers(name: &str) -> ProjectAnswers {
        ProjectAnswers {
            name: name.to_string(),
            title: "Demo Project".to_string(),
            description: String::new(),
            authors: vec!["Ada".to_string()],
        }
    }

    fn tool_names(project: &Project) -> Vec<&str> {
        project.tools.iter().map(Tool::name).collect()
    }

    #[test]
    fn test_build_project_from_config() {
        let args = InitArgs {
            path: Utf8PathBuf::from("/srv/work"),
            ..Default::default()
        };
        let project = build_project(&args, answers("demo"), &RuntimeConfig::default()).unwrap();

        assert_eq!(project.project_dir(), Utf8PathBuf::from("/srv/work/demo"));
        assert_eq!(project.title, "Demo Project");
        assert_eq!(project.authors, vec!["Ada"]);
        assert_eq!(project.python_version, "3.11");
        assert_eq!(tool_names(&project), vec!["poetry", "git", "dvc"]);
    }

    #[test]
    fn test_flags_override_config() {
        let args = InitArgs {
            tools: Some(vec!["poetry".to_string(), " conda ".to_string(), String::new()]),
            python_version: Some("3.12".to_string()),
            ..Default::default()
        };
        let project = build_project(&args, answers("demo"), &RuntimeConfig::default()).unwrap();

        assert_eq!(tool_names(&project), vec!["poetry", "conda"]);
        assert_eq!(project.python_version, "3.12");
    }

    #[test]
    fn test_unknown_tool_is_rejected() {
        let args = InitArgs {
            tools: Some(vec!["poetry".to_string(), "npm".to_string()]),
            ..Default::default()
        };
        let err = build_project(&args, answers("demo"), &RuntimeConfig::default()).unwrap_err();
        assert!(err.to_string().contains("npm"));
    }

    #[test]
    fn test_invalid_name_is_rejected() {
        let args = InitArgs::default();
        assert!(build_project(&args, answers("../escape"), &RuntimeConfig::default()).is_err());
    }
}
