//! SSO client error types.
//!
//! Protocol-level failures (wrong password, expired password, rejected
//! password change) are not errors here. They come back as ordinary
//! results and callers inspect the returned status or boolean.

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Result type for SSO operations.
pub type SsoResult<T> = Result<T, SsoError>;

/// SSO client errors.
#[derive(Debug, Error)]
pub enum SsoError {
    /// Invalid or incomplete endpoint configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Endpoint URL scheme other than `http` or `https`.
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    /// Network, DNS or TLS failure reported by the HTTP client.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not well-formed XML.
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// Response envelope lacks the operation element.
    #[error("missing required element: {0}")]
    MissingElement(String),

    /// Log-on `result` attribute outside the known status table.
    #[error("unknown log-on status code: {0}")]
    UnknownStatusCode(String),
}

impl SsoError {
    /// Returns true for errors raised before any network activity.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::UnsupportedScheme(_))
    }

    /// Returns true for failures reported by the HTTP client.
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns true when the server answered with something unusable.
    #[must_use]
    pub const fn is_response_error(&self) -> bool {
        matches!(
            self,
            Self::XmlParse(_) | Self::MissingElement(_) | Self::UnknownStatusCode(_)
        )
    }
}

impl From<quick_xml::Error> for SsoError {
    fn from(err: quick_xml::Error) -> Self {
        Self::XmlParse(err.to_string())
    }
}

impl From<AttrError> for SsoError {
    fn from(err: AttrError) -> Self {
        Self::XmlParse(err.to_string())
    }
}

impl From<std::io::Error> for SsoError {
    fn from(err: std::io::Error) -> Self {
        Self::XmlParse(err.to_string())
    }
}

impl From<url::ParseError> for SsoError {
    fn from(err: url::ParseError) -> Self {
        Self::Config(format!("invalid endpoint URL: {err}"))
    }
}
