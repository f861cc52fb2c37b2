//! SSO client operations.
//!
//! Every operation is one round trip: build the envelope, serialize it,
//! post it, parse the reply and read the `result` attribute. Nothing is
//! retried and nothing is cached between calls.

use std::sync::Arc;

use crate::codec::{self, ResponseEnvelope};
use crate::config::SsoConfig;
use crate::endpoint::Endpoint;
use crate::error::SsoResult;
use crate::request::RequestEnvelope;
use crate::status::LogOnResult;
use crate::transport::{HttpTransport, Transport};

/// WebAdvisor SSO client.
///
/// The endpoint is resolved when the client is built and never changes.
pub struct SsoClient<T: Transport = HttpTransport> {
    endpoint: Endpoint,
    transport: Arc<T>,
}

impl<T: Transport> Clone for SsoClient<T> {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> std::fmt::Debug for SsoClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsoClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl SsoClient<HttpTransport> {
    /// Creates a client for the environment selected in `config`.
    pub fn from_config(config: &SsoConfig) -> SsoResult<Self> {
        Ok(Self::new(config.endpoint()?))
    }

    /// Creates a client for an already resolved endpoint.
    #[must_use]
    pub fn new(endpoint: Endpoint) -> Self {
        Self::with_transport(endpoint, HttpTransport::new())
    }
}

impl<T: Transport> SsoClient<T> {
    /// Creates a client with a custom transport.
    #[must_use]
    pub fn with_transport(endpoint: Endpoint, transport: T) -> Self {
        Self::with_shared_transport(endpoint, Arc::new(transport))
    }

    /// Creates a client sharing an existing transport.
    #[must_use]
    pub fn with_shared_transport(endpoint: Endpoint, transport: Arc<T>) -> Self {
        Self {
            endpoint,
            transport,
        }
    }

    /// Returns the endpoint this client talks to.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Logs a user on.
    ///
    /// Protocol failures (bad password, expired password, bad account) are
    /// reported through the returned status, not as errors. `account` is
    /// left out of the request when `None` or empty.
    pub async fn log_on(
        &self,
        username: &str,
        password: &str,
        account: Option<&str>,
    ) -> SsoResult<LogOnResult> {
        let body = self
            .exchange(&RequestEnvelope::log_on(username, password, account))
            .await?;
        LogOnResult::from_body(&body)
    }

    /// Returns true when `token` names a live session.
    pub async fn is_logged_on(&self, token: &str) -> SsoResult<bool> {
        self.flag(&RequestEnvelope::logged_on(token)).await
    }

    /// Ends the session behind `token`. Returns true on success.
    pub async fn log_off(&self, token: &str) -> SsoResult<bool> {
        self.flag(&RequestEnvelope::log_off(token)).await
    }

    /// Changes a user's password. Returns true on success.
    ///
    /// The service answers `false` for every kind of rejection (wrong old
    /// password, complexity rules, locked account), so the reason for a
    /// failure cannot be recovered here.
    pub async fn change_password(
        &self,
        username: &str,
        old_password: &str,
        new_password: &str,
    ) -> SsoResult<bool> {
        self.flag(&RequestEnvelope::change_password(
            username,
            old_password,
            new_password,
        ))
        .await
    }

    async fn flag(&self, envelope: &RequestEnvelope) -> SsoResult<bool> {
        let body = self.exchange(envelope).await?;
        let response: ResponseEnvelope = codec::decode_response(&body)?;
        let result = response.element.result_flag();
        tracing::debug!(operation = %envelope.operation(), result, "SSO call completed");
        Ok(result)
    }

    async fn exchange(&self, envelope: &RequestEnvelope) -> SsoResult<String> {
        let bytes = codec::encode_request(envelope)?;
        tracing::debug!(
            operation = %envelope.operation(),
            endpoint = %self.endpoint,
            "sending SSO request"
        );
        self.transport.post_xml(&self.endpoint, bytes).await
    }
}
