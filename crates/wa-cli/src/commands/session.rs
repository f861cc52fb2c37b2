//! Log on, session and password commands.

use wa_sso::SsoClient;

use crate::config::OutputFormat;
use crate::output::{output_flag, output_log_on, prompt_password};
use crate::{CliConfig, CliError};

use super::Outcome;

/// Logs on and prints the result.
pub async fn run_logon(
    client: &SsoClient,
    config: &CliConfig,
    username: &str,
    account: Option<&str>,
    password: Option<String>,
    format: OutputFormat,
) -> crate::CliResult<Outcome> {
    let password = match password {
        Some(p) => p,
        None => prompt_password(&format!("Password for {username}: "))?,
    };
    let account = config.effective_account(account);

    let result = client
        .log_on(username, &password, account.as_deref())
        .await?;
    output_log_on(&result, format)?;

    Ok(Outcome::from_flag(result.is_success()))
}

/// Checks whether a token is still logged on.
pub async fn run_check(
    client: &SsoClient,
    token: &str,
    format: OutputFormat,
) -> crate::CliResult<Outcome> {
    let logged_on = client.is_logged_on(token).await?;
    output_flag("logged on", logged_on, format)?;
    Ok(Outcome::from_flag(logged_on))
}

/// Logs a token off.
pub async fn run_logoff(
    client: &SsoClient,
    token: &str,
    format: OutputFormat,
) -> crate::CliResult<Outcome> {
    let logged_off = client.log_off(token).await?;
    output_flag("logged off", logged_off, format)?;
    Ok(Outcome::from_flag(logged_off))
}

/// Changes a password after prompting for the old and new values.
pub async fn run_change_password(
    client: &SsoClient,
    username: &str,
    format: OutputFormat,
) -> crate::CliResult<Outcome> {
    let old_password = prompt_password(&format!("Current password for {username}: "))?;
    let new_password = prompt_password("New password: ")?;
    let confirmation = prompt_password("Confirm new password: ")?;
    check_new_password(&new_password, &confirmation)?;

    let changed = client
        .change_password(username, &old_password, &new_password)
        .await?;
    output_flag("password changed", changed, format)?;
    Ok(Outcome::from_flag(changed))
}

fn check_new_password(new_password: &str, confirmation: &str) -> crate::CliResult<()> {
    if new_password.is_empty() {
        return Err(CliError::InvalidArgument(
            "new password must not be empty".to_string(),
        ));
    }
    if new_password != confirmation {
        return Err(CliError::InvalidArgument(
            "new passwords do not match".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_password_must_match_confirmation() {
        assert!(check_new_password("N3w-pass", "N3w-pass").is_ok());
        assert!(matches!(
            check_new_password("N3w-pass", "N3w-Pass"),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(check_new_password("", "").is_err());
    }
}
