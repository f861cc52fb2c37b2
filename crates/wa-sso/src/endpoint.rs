//! SSO endpoint.
//!
//! The endpoint is resolved once from a base URL and never changes
//! afterwards. Only `http` and `https` are accepted; anything else is a
//! configuration error raised before any request is built.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{SsoError, SsoResult};

/// Transport scheme of the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Plaintext HTTP.
    Http,
    /// HTTP over TLS.
    Https,
}

impl Scheme {
    /// Returns the scheme as it appears in a URL.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    /// Returns true when the scheme requires TLS.
    #[must_use]
    pub const fn is_secure(self) -> bool {
        matches!(self, Self::Https)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = SsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            other => Err(SsoError::UnsupportedScheme(other.to_string())),
        }
    }
}

/// Parsed SSO endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Transport scheme.
    pub scheme: Scheme,
    /// Host name, with the port when one was given explicitly.
    pub host: String,
    /// Request path, always starting with `/`, query string included.
    pub path: String,
}

impl Endpoint {
    /// Parses a base URL such as `https://sso.example.edu/prod/SingleSignOn`.
    pub fn parse(base_url: &str) -> SsoResult<Self> {
        let url = Url::parse(base_url.trim())?;
        let scheme: Scheme = url.scheme().parse()?;

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| SsoError::Config(format!("endpoint URL has no host: {base_url}")))?;
        let host = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };

        let mut path = url.path().to_string();
        if !path.starts_with('/') {
            path.insert(0, '/');
        }
        if let Some(query) = url.query() {
            path.push('?');
            path.push_str(query);
        }

        Ok(Self { scheme, host, path })
    }

    /// Returns the full URL the transport posts to.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}://{}{}", self.scheme, self.host, self.path)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

impl FromStr for Endpoint {
    type Err = SsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
