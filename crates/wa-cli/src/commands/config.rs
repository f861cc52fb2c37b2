//! Configuration management commands.

use std::io::Write;

use wa_sso::{Environment, Endpoint};

use crate::cli::ConfigCommand;
use crate::config::OutputFormat;
use crate::output::{info, success};
use crate::CliConfig;

/// Runs a config command.
pub fn run_config(cmd: ConfigCommand, config: &mut CliConfig) -> crate::CliResult<()> {
    match cmd {
        ConfigCommand::Show => show_config(config),
        ConfigCommand::Set { key, value } => {
            set_config(config, &key, &value)?;
            config.save()?;
            success(&format!("Set {} = {}", key, value));
            Ok(())
        }
        ConfigCommand::Init => init_config(config),
    }
}

/// Shows the current configuration.
fn show_config(config: &CliConfig) -> crate::CliResult<()> {
    let config_path = CliConfig::config_path()?;

    info(&format!("Configuration file: {}", config_path.display()));
    println!();
    println!(
        "test_url: {}",
        config.sso.test_url.as_deref().unwrap_or("(none)")
    );
    println!(
        "production_url: {}",
        config.sso.production_url.as_deref().unwrap_or("(none)")
    );
    println!("environment: {}", config.sso.environment);

    if let Some(account) = &config.default_account {
        println!("default_account: {}", account);
    }

    println!("output_format: {}", config.output_format);

    Ok(())
}

/// Sets a configuration value in memory.
fn set_config(config: &mut CliConfig, key: &str, value: &str) -> crate::CliResult<()> {
    match key {
        "test_url" | "test" => {
            config.sso.test_url = Some(validated_url(value)?);
        }
        "production_url" | "production" | "prod_url" | "prod" => {
            config.sso.production_url = Some(validated_url(value)?);
        }
        "environment" | "env" => {
            config.sso.environment = value.parse::<Environment>()?;
        }
        "live" => {
            config.sso.environment = Environment::from_live_str(value)?;
        }
        "default_account" | "account" => {
            if value.is_empty() || value == "none" {
                config.default_account = None;
            } else {
                config.default_account = Some(value.to_string());
            }
        }
        "output_format" | "output" => {
            config.output_format = parse_output_format(value)?;
        }
        _ => {
            return Err(crate::CliError::InvalidArgument(format!(
                "Unknown configuration key: {}. Known keys: test_url, production_url, environment, live, default_account, output_format",
                key
            )));
        }
    }
    Ok(())
}

/// Checks that a URL resolves to an http(s) endpoint.
fn validated_url(value: &str) -> crate::CliResult<String> {
    Endpoint::parse(value)?;
    Ok(value.trim().to_string())
}

fn parse_output_format(value: &str) -> crate::CliResult<OutputFormat> {
    match value.to_lowercase().as_str() {
        "table" => Ok(OutputFormat::Table),
        "json" => Ok(OutputFormat::Json),
        "quiet" => Ok(OutputFormat::Quiet),
        _ => Err(crate::CliError::InvalidArgument(format!(
            "Unknown output format: {}. Supported: table, json, quiet",
            value
        ))),
    }
}

/// Reads one line, returning `None` when it is blank.
fn prompt_line(prompt: &str) -> crate::CliResult<Option<String>> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    let trimmed = input.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

/// Initializes configuration interactively.
fn init_config(config: &mut CliConfig) -> crate::CliResult<()> {
    let config_path = CliConfig::config_path()?;

    info("Initializing WebAdvisor SSO configuration...");
    println!();

    let current = config.sso.test_url.as_deref().unwrap_or("(none)").to_string();
    if let Some(url) = prompt_line(&format!("Test URL [{}]: ", current))? {
        set_config(config, "test_url", &url)?;
    }

    let current = config
        .sso
        .production_url
        .as_deref()
        .unwrap_or("(none)")
        .to_string();
    if let Some(url) = prompt_line(&format!("Production URL [{}]: ", current))? {
        set_config(config, "production_url", &url)?;
    }

    let current = config.sso.environment;
    if let Some(env) = prompt_line(&format!("Environment (test/production) [{}]: ", current))? {
        set_config(config, "environment", &env)?;
    }

    let current = config.default_account.as_deref().unwrap_or("(none)").to_string();
    if let Some(account) = prompt_line(&format!("Default account [{}]: ", current))? {
        if account != "(none)" {
            set_config(config, "default_account", &account)?;
        }
    }

    let current = config.output_format;
    if let Some(format) = prompt_line(&format!("Output format (table/json/quiet) [{}]: ", current))? {
        set_config(config, "output_format", &format)?;
    }

    config.save()?;

    println!();
    success(&format!("Configuration saved to: {}", config_path.display()));
    Ok(())
}
