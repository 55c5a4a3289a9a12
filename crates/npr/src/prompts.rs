//! Interactive collection of project details

use anyhow::Result;
use dialoguer::Input;
use npr_core::types::validate_project_name;

use crate::cli::InitArgs;

/// Values gathered from flags and prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectAnswers {
    pub name: String,
    pub title: String,
    pub description: String,
    pub authors: Vec<String>,
}

/// Fill in every value not given on the command line.
///
/// Prompts only when `interactive` is true; otherwise falls back to
/// `default_name`, the name as title, an empty description and the
/// authors given as flags.
pub fn collect(args: &InitArgs, default_name: &str, interactive: bool) -> Result<ProjectAnswers> {
    if !interactive {
        return Ok(from_args(args, default_name));
    }

    let name = match &args.name {
        Some(name) => name.clone(),
        None => Input::<String>::new()
            .with_prompt("Project name")
            .default(default_name.to_string())
            .validate_with(|input: &String| -> Result<(), String> {
                validate_project_name(input).map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(prompt_error)?,
    };

    let title = match &args.title {
        Some(title) => title.clone(),
        None => Input::<String>::new()
            .with_prompt("Project title")
            .default(name.clone())
            .interact_text()
            .map_err(prompt_error)?,
    };

    let description = match &args.description {
        Some(description) => description.clone(),
        None => Input::<String>::new()
            .with_prompt("Description")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?,
    };

    let authors = if args.authors.is_empty() {
        prompt_authors()?
    } else {
        args.authors.clone()
    };

    Ok(ProjectAnswers {
        name,
        title,
        description,
        authors,
    })
}

/// Ask for authors one per line until an empty line
fn prompt_authors() -> Result<Vec<String>> {
    let mut authors = Vec::new();
    loop {
        let author = Input::<String>::new()
            .with_prompt("Author (empty line to finish)")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;

        let author = author.trim();
        if author.is_empty() {
            break;
        }
        authors.push(author.to_string());
    }
    Ok(authors)
}

fn from_args(args: &InitArgs, default_name: &str) -> ProjectAnswers {
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| default_name.to_string());

    ProjectAnswers {
        title: args.title.clone().unwrap_or_else(|| name.clone()),
        description: args.description.clone().unwrap_or_default(),
        authors: args.authors.clone(),
        name,
    }
}

fn prompt_error(err: dialoguer::Error) -> anyhow::Error {
    match err {
        dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
            npr_projects::Error::UserAbort.into()
        }
        other => anyhow::Error::new(other).context("Failed to read input"),
    }
}

/// Whether prompts can be shown at all
pub fn can_prompt(args: &InitArgs) -> bool {
    !args.no_input && console::user_attended()
}
