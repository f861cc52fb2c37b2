//! Common test utilities and fixtures.

#![allow(dead_code)]

use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wa_sso::{Endpoint, SsoClient, SsoConfig};

/// Servlet path used by every test.
pub const SSO_PATH: &str = "/naznet/SingleSignOn";

/// Request prolog expected on the wire.
pub const PROLOG: &str = r#"<?xml version="1.0"?><!DOCTYPE Request SYSTEM "SSORequest.dtd">"#;

/// Mock SSO servlet.
pub struct MockSso {
    pub server: MockServer,
}

impl MockSso {
    /// Starts a mock server.
    pub async fn start() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("wa_sso=debug")
            .with_test_writer()
            .try_init();

        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL of the servlet.
    pub fn url(&self) -> String {
        format!("{}{}", self.server.uri(), SSO_PATH)
    }

    /// Client pointed at this server.
    pub fn client(&self) -> SsoClient {
        SsoClient::new(Endpoint::parse(&self.url()).expect("mock URL parses"))
    }

    /// Client built from a test/production config, with this server as
    /// the test instance.
    pub fn client_for_test_instance(&self, production_url: &str) -> wa_sso::SsoResult<SsoClient> {
        SsoClient::from_config(&SsoConfig::new(self.url(), production_url, false))
    }

    /// Expects exactly one POST carrying `request` (without prolog) and
    /// answers it with `response`.
    pub async fn expect(&self, request: &str, response: &str) {
        Mock::given(method("POST"))
            .and(path(SSO_PATH))
            .and(header("content-type", "text/xml"))
            .and(body_string(format!("{PROLOG}{request}")))
            .respond_with(ResponseTemplate::new(200).set_body_string(response))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Answers any POST with `status` and `body`.
    pub async fn reply_with(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path(SSO_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }
}
