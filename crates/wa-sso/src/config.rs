//! Endpoint selection.
//!
//! Two base URLs are configured side by side, one for the test instance and
//! one for production, and a single switch picks which one the client
//! talks to. The choice is resolved once into an [`Endpoint`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::endpoint::Endpoint;
use crate::error::{SsoError, SsoResult};

/// Environment variable holding the test instance URL.
pub const TEST_URL_VAR: &str = "WA_SSO_TEST_URL";

/// Environment variable holding the production instance URL.
pub const PROD_URL_VAR: &str = "WA_SSO_PROD_URL";

/// Environment variable selecting production (`true`) or test (`false`).
pub const LIVE_VAR: &str = "WA_SSO_LIVE";

/// Which WebAdvisor instance to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// The test instance.
    Test,
    /// The production instance.
    #[default]
    Production,
}

impl Environment {
    /// Maps the live switch onto an environment.
    #[must_use]
    pub const fn from_live(live: bool) -> Self {
        if live {
            Self::Production
        } else {
            Self::Test
        }
    }

    /// Parses a live switch value such as `true`, `0` or `no`.
    pub fn from_live_str(value: &str) -> SsoResult<Self> {
        parse_live(value).map(Self::from_live)
    }

    /// Returns true for production.
    #[must_use]
    pub const fn is_live(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Test => f.write_str("test"),
            Self::Production => f.write_str("production"),
        }
    }
}

impl FromStr for Environment {
    type Err = SsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "test" => Ok(Self::Test),
            "production" | "prod" => Ok(Self::Production),
            other => Err(SsoError::Config(format!(
                "unknown environment: {other} (expected test or production)"
            ))),
        }
    }
}

/// SSO client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsoConfig {
    /// Base URL of the test instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_url: Option<String>,

    /// Base URL of the production instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_url: Option<String>,

    /// Selected instance.
    #[serde(default)]
    pub environment: Environment,
}

impl SsoConfig {
    /// Creates a configuration from both URLs and the live switch.
    #[must_use]
    pub fn new(
        test_url: impl Into<String>,
        production_url: impl Into<String>,
        live: bool,
    ) -> Self {
        Self {
            test_url: Some(test_url.into()),
            production_url: Some(production_url.into()),
            environment: Environment::from_live(live),
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn from_env() -> SsoResult<Self> {
        let _ = dotenvy::dotenv();

        let test_url = non_empty_var(TEST_URL_VAR);
        let production_url = non_empty_var(PROD_URL_VAR);
        let environment = match std::env::var(LIVE_VAR) {
            Ok(value) => Environment::from_live_str(&value)?,
            Err(_) => Environment::default(),
        };

        Ok(Self {
            test_url,
            production_url,
            environment,
        })
    }

    /// Sets the selected environment.
    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Returns the base URL of the selected environment.
    pub fn selected_url(&self) -> SsoResult<&str> {
        let (url, var) = match self.environment {
            Environment::Test => (self.test_url.as_deref(), TEST_URL_VAR),
            Environment::Production => (self.production_url.as_deref(), PROD_URL_VAR),
        };
        url.ok_or_else(|| {
            SsoError::Config(format!(
                "no {} URL configured (set {var})",
                self.environment
            ))
        })
    }

    /// Resolves the selected URL into an endpoint.
    pub fn endpoint(&self) -> SsoResult<Endpoint> {
        Endpoint::parse(self.selected_url()?)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_live(value: &str) -> SsoResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(SsoError::Config(format!(
            "invalid {LIVE_VAR} value: {other} (expected true or false)"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::Scheme;

    const TEST: &str = "http://naznet2.naz.edu/nazdev/SingleSignOn";
    const PROD: &str = "https://naznet.naz.edu/naznet/SingleSignOn";

    #[test]
    fn live_selects_production() {
        let endpoint = SsoConfig::new(TEST, PROD, true).endpoint().unwrap();
        assert_eq!(endpoint.scheme, Scheme::Https);
        assert_eq!(endpoint.host, "naznet.naz.edu");
        assert_eq!(endpoint.path, "/naznet/SingleSignOn");
    }

    #[test]
    fn not_live_selects_test() {
        let endpoint = SsoConfig::new(TEST, PROD, false).endpoint().unwrap();
        assert_eq!(endpoint.scheme, Scheme::Http);
        assert_eq!(endpoint.host, "naznet2.naz.edu");
        assert_eq!(endpoint.path, "/nazdev/SingleSignOn");
    }

    #[test]
    fn default_environment_is_production() {
        assert_eq!(SsoConfig::default().environment, Environment::Production);
    }

    #[test]
    fn missing_selected_url_is_config_error() {
        let config = SsoConfig {
            test_url: Some(TEST.to_string()),
            production_url: None,
            environment: Environment::Production,
        };
        let err = config.endpoint().unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains(PROD_URL_VAR));

        // The unselected URL may be missing.
        let config = config.with_environment(Environment::Test);
        assert!(config.endpoint().is_ok());
    }

    #[test]
    fn bad_scheme_fails_at_resolution() {
        let config = SsoConfig::new(TEST, "gopher://naznet.naz.edu/SingleSignOn", true);
        assert!(matches!(
            config.endpoint(),
            Err(SsoError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn live_switch_parsing() {
        assert!(parse_live("TRUE").unwrap());
        assert!(parse_live("1").unwrap());
        assert!(!parse_live("false").unwrap());
        assert!(!parse_live(" 0 ").unwrap());
        assert!(parse_live("maybe").is_err());

        assert_eq!(Environment::from_live_str("yes").unwrap(), Environment::Production);
        assert_eq!(Environment::from_live_str("no").unwrap(), Environment::Test);
        assert!(matches!(
            Environment::from_live_str("sometimes"),
            Err(SsoError::Config(_))
        ));
    }

    #[test]
    fn environment_parsing() {
        assert_eq!("test".parse::<Environment>().unwrap(), Environment::Test);
        assert_eq!("Prod".parse::<Environment>().unwrap(), Environment::Production);
        assert!("staging".parse::<Environment>().is_err());
        assert_eq!(Environment::Test.to_string(), "test");
    }

    #[test]
    fn config_serialized_shape() {
        let config = SsoConfig::new(TEST, PROD, false);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["environment"], "test");
        assert_eq!(json["production_url"], PROD);
    }
}
