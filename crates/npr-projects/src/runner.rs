//! External command execution

use crate::error::CommandError;
use async_trait::async_trait;
use camino::Utf8Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::debug;

/// Runs a resolved setup command in a working directory
///
/// Implementations block (await) until the command terminates. There is no
/// timeout; a hung command hangs the caller.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` with `working_dir` as its current directory
    async fn run(&self, command: &str, working_dir: &Utf8Path) -> Result<(), CommandError>;
}

/// Runs commands through the platform shell (`sh -c`, or `cmd /C` on Windows)
#[derive(Debug, Clone, Default)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str, working_dir: &Utf8Path) -> Result<(), CommandError> {
        debug!("Running `{}` in {}", command, working_dir);

        let output = shell_command(command)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| CommandError::Spawn {
                command: command.to_string(),
                working_dir: working_dir.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(CommandError::Failed {
                command: command.to_string(),
                status: describe_status(&output.status),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

fn describe_status(status: &ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
