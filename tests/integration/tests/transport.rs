//! Transport and response failures.

use std::time::Duration;

use wa_sso::{Endpoint, HttpTransport, SsoClient, SsoConfig, SsoError};

use crate::common::MockSso;

#[tokio::test]
async fn test_http_error_status_body_is_still_parsed() -> anyhow::Result<()> {
    let sso = MockSso::start().await;
    sso.reply_with(500, r#"<Response><LogOff result="false"/></Response>"#)
        .await;

    assert!(!sso.client().log_off("abc123").await?);
    Ok(())
}

#[tokio::test]
async fn test_malformed_response_fails_boolean_operations() -> anyhow::Result<()> {
    let sso = MockSso::start().await;
    sso.reply_with(502, "<html><body>Bad Gateway</body>").await;
    let client = sso.client();

    let err = client.is_logged_on("abc123").await.unwrap_err();
    assert!(matches!(err, SsoError::XmlParse(_)), "{err:?}");

    let err = client.change_password("alice", "a", "b").await.unwrap_err();
    assert!(err.is_response_error());
    Ok(())
}

#[tokio::test]
async fn test_malformed_response_soft_fails_log_on() -> anyhow::Result<()> {
    let sso = MockSso::start().await;
    sso.reply_with(502, "<html><body>Bad Gateway</body>").await;

    let result = sso.client().log_on("alice", "secret", None).await?;

    assert_eq!(result.status_code, None);
    assert_eq!(
        result.status_text,
        "&lt;html&gt;&lt;body&gt;Bad Gateway&lt;/body&gt;"
    );
    Ok(())
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() -> anyhow::Result<()> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    drop(listener);

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()?;
    let endpoint = Endpoint::parse(&format!("http://127.0.0.1:{port}/naznet/SingleSignOn"))?;
    let client = SsoClient::with_transport(endpoint, HttpTransport::with_client(http));

    let err = client.is_logged_on("abc123").await.unwrap_err();
    assert!(err.is_transport_error(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn test_unsupported_scheme_fails_before_any_request() {
    let sso = MockSso::start().await;
    let config = SsoConfig::new(sso.url(), "ftp://127.0.0.1/naznet/SingleSignOn", true);

    let err = SsoClient::from_config(&config).unwrap_err();

    assert!(matches!(err, SsoError::UnsupportedScheme(ref s) if s == "ftp"));
    assert!(sso
        .server
        .received_requests()
        .await
        .unwrap_or_default()
        .is_empty());
}
