//! Terminal output utilities

use console::{measure_text_width, style};
use indicatif::{ProgressBar, ProgressStyle};

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("\n{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print lines inside a rounded box
pub fn panel(lines: &[String]) {
    for line in panel_lines(lines) {
        println!("{}", line);
    }
}

fn panel_lines(lines: &[String]) -> Vec<String> {
    let width = lines
        .iter()
        .map(|line| measure_text_width(line))
        .max()
        .unwrap_or(0);
    let border = "─".repeat(width + 2);

    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(format!("{}", style(format!("╭{}╮", border)).blue()));
    for line in lines {
        let padding = " ".repeat(width - measure_text_width(line));
        out.push(format!(
            "{} {}{} {}",
            style("│").blue(),
            line,
            padding,
            style("│").blue()
        ));
    }
    out.push(format!("{}", style(format!("╰{}╯", border)).blue()));
    out
}

/// Print the welcome banner
pub fn welcome() {
    panel(&[
        style("Project Initializer").magenta().bold().to_string(),
        style("Create a new project directory and initialize its tooling")
            .cyan()
            .to_string(),
    ]);
    println!();
}

/// Print the follow-up instructions after a project is created
pub fn next_steps(project_name: &str) {
    println!();
    panel(&[
        style("Next steps:").cyan().bold().to_string(),
        format!("1. {} {}", style("cd").green(), project_name),
        "2. Start adding your project files!".to_string(),
    ]);
}

/// Create a spinner
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let spinner_style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    pb.set_style(spinner_style);
    pb.set_message(style(msg).green().bold().to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
