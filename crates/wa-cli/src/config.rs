//! CLI configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wa_sso::{config::LIVE_VAR, Environment, SsoConfig};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// SSO endpoints and the selected instance.
    #[serde(flatten)]
    pub sso: SsoConfig,

    /// Colleague account used by `logon` when none is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_account: Option<String>,

    /// Output format.
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl CliConfig {
    /// Loads configuration from the default file.
    pub fn load() -> crate::CliResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> crate::CliResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content).map_err(|e| {
                crate::CliError::Config(format!("failed to parse config: {e}"))
            })?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves configuration to the default file.
    pub fn save(&self) -> crate::CliResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves configuration to `path`.
    pub fn save_to(&self, path: &Path) -> crate::CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::CliError::Config(format!("failed to serialize config: {e}"))
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Gets the configuration file path.
    pub fn config_path() -> crate::CliResult<PathBuf> {
        let home = dirs_next::home_dir().ok_or_else(|| {
            crate::CliError::Config("could not determine home directory".to_string())
        })?;
        Ok(home.join(".webadvisor").join("wa.toml"))
    }

    /// Builds the SSO configuration for one invocation.
    ///
    /// Precedence, lowest first: config file, `WA_SSO_*` environment
    /// variables, command-line flags. A `url` override replaces the URL of
    /// whichever instance ends up selected.
    pub fn effective_sso(
        &self,
        env_override: Option<Environment>,
        url_override: Option<&str>,
    ) -> crate::CliResult<SsoConfig> {
        let from_env = SsoConfig::from_env()?;
        let live_set = std::env::var_os(LIVE_VAR).is_some();
        Ok(merge_sso(
            &self.sso,
            &from_env,
            live_set,
            env_override,
            url_override,
        ))
    }

    /// Gets the effective account (from args or config).
    #[must_use]
    pub fn effective_account(&self, arg_account: Option<&str>) -> Option<String> {
        arg_account
            .map(ToString::to_string)
            .or_else(|| self.default_account.clone())
    }
}

fn merge_sso(
    file: &SsoConfig,
    from_env: &SsoConfig,
    live_set: bool,
    env_override: Option<Environment>,
    url_override: Option<&str>,
) -> SsoConfig {
    let mut sso = file.clone();
    if from_env.test_url.is_some() {
        sso.test_url.clone_from(&from_env.test_url);
    }
    if from_env.production_url.is_some() {
        sso.production_url.clone_from(&from_env.production_url);
    }
    if live_set {
        sso.environment = from_env.environment;
    }
    if let Some(environment) = env_override {
        sso.environment = environment;
    }
    if let Some(url) = url_override {
        let slot = match sso.environment {
            Environment::Test => &mut sso.test_url,
            Environment::Production => &mut sso.production_url,
        };
        *slot = Some(url.to_string());
    }
    sso
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
    /// Quiet (minimal output).
    Quiet,
}

impl OutputFormat {
    /// Returns the name used in the config file and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Quiet => "quiet",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
