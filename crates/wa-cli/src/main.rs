//! # WebAdvisor SSO CLI
//!
//! Command-line client for the WebAdvisor single sign-on service.

#![forbid(unsafe_code)]
#![allow(clippy::uninlined_format_args)]

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wa_cli::{
    cli::{Cli, Command},
    commands::{
        build_client, run_change_password, run_check, run_config, run_logoff, run_logon,
        Outcome, Target,
    },
    config::{CliConfig, OutputFormat},
    output::error,
    CliResult,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match CliConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error(&format!("Failed to load configuration: {}", e));
            std::process::exit(1);
        }
    };

    let format = cli.output.unwrap_or(config.output_format);
    let target = Target {
        environment: cli.env.map(Into::into),
        url: cli.url.as_deref(),
    };

    let result = run(cli.command, &mut config, target, format).await;

    match result {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            error(&e.to_string());
            std::process::exit(1);
        }
    }
}

async fn run(
    command: Command,
    config: &mut CliConfig,
    target: Target<'_>,
    format: OutputFormat,
) -> CliResult<Outcome> {
    match command {
        Command::Logon {
            username,
            account,
            password,
        } => {
            let client = build_client(config, target)?;
            run_logon(
                &client,
                config,
                &username,
                account.as_deref(),
                password,
                format,
            )
            .await
        }
        Command::Check { token } => {
            let client = build_client(config, target)?;
            run_check(&client, &token, format).await
        }
        Command::Logoff { token } => {
            let client = build_client(config, target)?;
            run_logoff(&client, &token, format).await
        }
        Command::ChangePassword { username } => {
            let client = build_client(config, target)?;
            run_change_password(&client, &username, format).await
        }
        Command::Config(cmd) => run_config(cmd, config).map(|()| Outcome::Accepted),
    }
}
