//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser};

/// npr - create a new project directory and initialize its tooling
#[derive(Parser, Debug)]
#[command(name = "npr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a config file (replaces ~/.npr/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(flatten)]
    pub init: InitArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InitArgs {
    /// Path where project will be created
    #[arg(short, long, default_value = ".")]
    pub path: Utf8PathBuf,

    /// Project name (prompted when omitted)
    #[arg(long)]
    pub name: Option<String>,

    /// Project title (defaults to the name)
    #[arg(long)]
    pub title: Option<String>,

    /// Short project description
    #[arg(long)]
    pub description: Option<String>,

    /// Project author (repeatable)
    #[arg(long = "author")]
    pub authors: Vec<String>,

    /// Setup tools to run, in order (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub tools: Option<Vec<String>>,

    /// Python version recorded in the generated files
    #[arg(long)]
    pub python_version: Option<String>,

    /// Never prompt; use flags and configured defaults
    #[arg(long)]
    pub no_input: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["npr"]).unwrap();
        assert_eq!(cli.init.path, Utf8PathBuf::from("."));
        assert!(cli.init.name.is_none());
        assert!(cli.init.authors.is_empty());
        assert!(cli.init.tools.is_none());
        assert!(!cli.init.no_input);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_short_path_flag() {
        let cli = Cli::try_parse_from(["npr", "-p", "/tmp/work"]).unwrap();
        assert_eq!(cli.init.path, Utf8PathBuf::from("/tmp/work"));
    }

    #[test]
    fn test_repeated_authors_and_tool_list() {
        let cli = Cli::try_parse_from([
            "npr",
            "--path",
            "/srv",
            "--name",
            "demo",
            "--author",
            "Ada",
            "--author",
            "Grace",
            "--tools",
            "poetry,git",
            "--no-input",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.init.name.as_deref(), Some("demo"));
        assert_eq!(cli.init.authors, vec!["Ada", "Grace"]);
        assert_eq!(
            cli.init.tools,
            Some(vec!["poetry".to_string(), "git".to_string()])
        );
        assert!(cli.init.no_input);
        assert_eq!(cli.verbose, 2);
    }
}
