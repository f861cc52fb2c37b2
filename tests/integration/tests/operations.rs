//! The four SSO operations over HTTP.

use wa_sso::{LogOnResult, LogOnStatus};

use crate::common::MockSso;

#[tokio::test]
async fn test_log_on_success() -> anyhow::Result<()> {
    let sso = MockSso::start().await;
    sso.expect(
        r#"<Request><LogOn username="alice" password="secret"/></Request>"#,
        r#"<Response><LogOn result="0" token="abc123"/></Response>"#,
    )
    .await;

    let result = sso.client().log_on("alice", "secret", None).await?;

    assert_eq!(
        result,
        LogOnResult {
            status_code: Some(0),
            status_text: "Successful login".to_string(),
            token: Some("abc123".to_string()),
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_log_on_with_account_and_expired_password() -> anyhow::Result<()> {
    let sso = MockSso::start().await;
    sso.expect(
        r#"<Request><LogOn username="bob" password="pw" account="ALUM"/></Request>"#,
        r#"<?xml version="1.0"?><Response><LogOn result="1"/></Response>"#,
    )
    .await;

    let result = sso.client().log_on("bob", "pw", Some("ALUM")).await?;

    assert_eq!(result.status(), Some(LogOnStatus::PasswordExpired));
    assert_eq!(result.status_text, "Password has expired");
    assert_eq!(result.token, None);
    Ok(())
}

#[tokio::test]
async fn test_log_on_all_status_codes() -> anyhow::Result<()> {
    for status in LogOnStatus::ALL {
        let sso = MockSso::start().await;
        sso.reply_with(
            200,
            &format!(r#"<Response><LogOn result="{}"/></Response>"#, status.code()),
        )
        .await;

        let result = sso.client().log_on("alice", "secret", None).await?;

        assert_eq!(result.status_code, Some(status.code()));
        assert_eq!(result.status_text, status.message());
    }
    Ok(())
}

#[tokio::test]
async fn test_log_on_without_result_returns_escaped_body() -> anyhow::Result<()> {
    let sso = MockSso::start().await;
    let body = r#"<Response><LogOn message="Service & database offline"/></Response>"#;
    sso.reply_with(200, &body.replace('&', "&amp;")).await;

    let result = sso.client().log_on("alice", "secret", None).await?;

    assert_eq!(result.status_code, None);
    assert_eq!(
        result.status_text,
        "&lt;Response&gt;&lt;LogOn message=\"Service &amp;amp; database offline\"/&gt;&lt;/Response&gt;"
    );
    assert_eq!(result.token, None);
    Ok(())
}

#[tokio::test]
async fn test_check_logged_in() -> anyhow::Result<()> {
    let sso = MockSso::start().await;
    sso.expect(
        r#"<Request><LoggedOn token="abc123"/></Request>"#,
        r#"<Response><LoggedOn result="true"/></Response>"#,
    )
    .await;

    assert!(sso.client().is_logged_on("abc123").await?);
    Ok(())
}

#[tokio::test]
async fn test_log_off() -> anyhow::Result<()> {
    let sso = MockSso::start().await;
    sso.expect(
        r#"<Request><LogOff token="abc123"/></Request>"#,
        r#"<Response><LogOff result="true"/></Response>"#,
    )
    .await;

    assert!(sso.client().log_off("abc123").await?);
    Ok(())
}

#[tokio::test]
async fn test_change_password_mismatched_old_password() -> anyhow::Result<()> {
    let sso = MockSso::start().await;
    sso.expect(
        r#"<Request><ChangePassword username="alice" password="not-it" newpassword="N3w-pass"/></Request>"#,
        r#"<Response><ChangePassword result="false"/></Response>"#,
    )
    .await;

    let changed = sso
        .client()
        .change_password("alice", "not-it", "N3w-pass")
        .await?;

    assert!(!changed);
    Ok(())
}

#[tokio::test]
async fn test_boolean_results_other_than_true_are_false() -> anyhow::Result<()> {
    for reply in [
        r#"<Response><LoggedOn result="false"/></Response>"#,
        r#"<Response><LoggedOn result="yes"/></Response>"#,
        r#"<Response><LoggedOn/></Response>"#,
    ] {
        let sso = MockSso::start().await;
        sso.reply_with(200, reply).await;
        assert!(!sso.client().is_logged_on("abc123").await?, "{reply}");
    }
    Ok(())
}

#[tokio::test]
async fn test_environment_switch_only_changes_target() -> anyhow::Result<()> {
    let sso = MockSso::start().await;
    sso.expect(
        r#"<Request><LoggedOn token="abc123"/></Request>"#,
        r#"<Response><LoggedOn result="true"/></Response>"#,
    )
    .await;

    // Production points nowhere reachable; the test instance is selected.
    let client = sso.client_for_test_instance("https://sso.invalid/naznet/SingleSignOn")?;

    assert_eq!(client.endpoint().url(), sso.url());
    assert!(client.is_logged_on("abc123").await?);
    Ok(())
}
