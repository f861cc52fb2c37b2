//! HTTP transport.
//!
//! The transport posts one serialized envelope and hands back the response
//! body. It does not retry, and it does not treat HTTP error statuses as
//! failures: whatever body the server sends is returned for parsing.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::codec;
use crate::endpoint::Endpoint;
use crate::error::SsoResult;

/// Sends a serialized request envelope and returns the response body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Posts `body` to `endpoint` with `Content-Type: text/xml`.
    async fn post_xml(&self, endpoint: &Endpoint, body: Vec<u8>) -> SsoResult<String>;
}

/// `reqwest`-backed transport.
///
/// Timeouts, proxies and TLS roots are whatever the wrapped client was
/// built with.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with a default HTTP client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport around a preconfigured HTTP client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_xml(&self, endpoint: &Endpoint, body: Vec<u8>) -> SsoResult<String> {
        let response = self
            .client
            .post(endpoint.url())
            .header(CONTENT_TYPE, codec::CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "SSO response received");
        } else {
            tracing::warn!(
                status = status.as_u16(),
                endpoint = %endpoint,
                "SSO endpoint returned a non-success status"
            );
        }

        Ok(response.text().await?)
    }
}
