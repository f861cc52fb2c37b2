//! Output formatting utilities.

use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};
use wa_sso::LogOnResult;

use crate::config::OutputFormat;

/// Prints a success message.
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Prints an error message.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Prints a warning message.
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message);
}

/// Prints an info message.
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Log-on result row for table output.
#[derive(Debug, Tabled)]
struct LogOnRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Token")]
    token: String,
}

impl From<&LogOnResult> for LogOnRow {
    fn from(result: &LogOnResult) -> Self {
        Self {
            code: result
                .status_code
                .map_or_else(|| "-".to_string(), |c| c.to_string()),
            status: result.status_text.clone(),
            token: result.token.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Outputs a log-on result.
///
/// Quiet output prints only the token, so it can be captured by scripts.
pub fn output_log_on(result: &LogOnResult, format: OutputFormat) -> crate::CliResult<()> {
    match format {
        OutputFormat::Table => {
            let table = Table::new([LogOnRow::from(result)])
                .with(Style::rounded())
                .to_string();
            println!("{table}");
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Quiet => {
            if let Some(token) = &result.token {
                println!("{token}");
            }
        }
    }
    Ok(())
}

/// Outputs a boolean operation result.
pub fn output_flag(label: &str, value: bool, format: OutputFormat) -> crate::CliResult<()> {
    match format {
        OutputFormat::Table => {
            if value {
                success(&format!("{label}: yes"));
            } else {
                warning(&format!("{label}: no"));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({ "operation": label, "result": value });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Quiet => println!("{value}"),
    }
    Ok(())
}

/// Prompts for password input (hidden).
pub fn prompt_password(prompt: &str) -> crate::CliResult<String> {
    rpassword::prompt_password(prompt).map_err(crate::CliError::Io)
}
