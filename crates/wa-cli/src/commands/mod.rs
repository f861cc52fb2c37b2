//! Command implementations.

pub mod config;
pub mod session;

pub use config::run_config;
pub use session::{run_change_password, run_check, run_logoff, run_logon};

use wa_sso::{Environment, SsoClient};

use crate::CliConfig;

/// Result of a command that reached the SSO service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The service accepted the request.
    Accepted,
    /// The service answered but rejected the request.
    Rejected,
}

impl Outcome {
    /// Maps a boolean service answer onto an outcome.
    #[must_use]
    pub const fn from_flag(flag: bool) -> Self {
        if flag {
            Self::Accepted
        } else {
            Self::Rejected
        }
    }

    /// Process exit code: 0 when accepted, 2 when rejected.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Accepted => 0,
            Self::Rejected => 2,
        }
    }
}

/// Connection options shared by all SSO commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct Target<'a> {
    /// Instance override.
    pub environment: Option<Environment>,
    /// URL override for the selected instance.
    pub url: Option<&'a str>,
}

/// Builds an SSO client for the effective configuration.
pub fn build_client(config: &CliConfig, target: Target<'_>) -> crate::CliResult<SsoClient> {
    let sso = config.effective_sso(target.environment, target.url)?;
    let client = SsoClient::from_config(&sso)?;
    tracing::debug!(
        environment = %sso.environment,
        endpoint = %client.endpoint(),
        "SSO client ready"
    );
    Ok(client)
}
