//! CLI argument parsing.

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::OutputFormat;

/// WebAdvisor SSO command-line client.
#[derive(Debug, Parser)]
#[command(name = "wa")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Instance to talk to (overrides config).
    #[arg(short, long, value_enum, env = "WA_SSO_ENV")]
    pub env: Option<EnvArg>,

    /// SSO URL to use for the selected instance (overrides config).
    #[arg(short, long, env = "WA_SSO_URL")]
    pub url: Option<String>,

    /// Output format (overrides config).
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Instance selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnvArg {
    /// The test instance.
    Test,
    /// The production instance.
    Production,
}

impl From<EnvArg> for wa_sso::Environment {
    fn from(arg: EnvArg) -> Self {
        match arg {
            EnvArg::Test => Self::Test,
            EnvArg::Production => Self::Production,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log on and print the session token.
    Logon {
        /// WebAdvisor username.
        #[arg(long, short = 'U')]
        username: String,

        /// Colleague account to log into (defaults to the configured account).
        #[arg(long)]
        account: Option<String>,

        /// Password (prompted when omitted).
        #[arg(long, env = "WA_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Check whether a session token is still logged on.
    Check {
        /// Session token.
        token: String,
    },

    /// Log a session token off.
    Logoff {
        /// Session token.
        token: String,
    },

    /// Change a user's password.
    ChangePassword {
        /// WebAdvisor username.
        #[arg(long, short = 'U')]
        username: String,
    },

    /// Configuration management.
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Config commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,

        /// Configuration value.
        value: String,
    },

    /// Initialize configuration interactively.
    Init,
}
