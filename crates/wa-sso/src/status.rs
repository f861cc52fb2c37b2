//! Log-on status codes.
//!
//! The `result` attribute of a `LogOn` response is an index into a fixed
//! table of four outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::{self, ResponseEnvelope};
use crate::error::{SsoError, SsoResult};

/// Outcome of a log-on attempt, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogOnStatus {
    /// Credentials accepted; a token was issued.
    Success,
    /// Credentials accepted but the password must be changed.
    PasswordExpired,
    /// Unknown user or wrong password.
    InvalidCredentials,
    /// The requested account does not exist or is not permitted.
    InvalidAccount,
}

impl LogOnStatus {
    /// All statuses in code order.
    pub const ALL: [Self; 4] = [
        Self::Success,
        Self::PasswordExpired,
        Self::InvalidCredentials,
        Self::InvalidAccount,
    ];

    /// Returns the wire code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::PasswordExpired => 1,
            Self::InvalidCredentials => 2,
            Self::InvalidAccount => 3,
        }
    }

    /// Looks up a status by wire code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            1 => Some(Self::PasswordExpired),
            2 => Some(Self::InvalidCredentials),
            3 => Some(Self::InvalidAccount),
            _ => None,
        }
    }

    /// Returns the human-readable status text.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Success => "Successful login",
            Self::PasswordExpired => "Password has expired",
            Self::InvalidCredentials => "Invalid username or password",
            Self::InvalidAccount => "Invalid account",
        }
    }
}

impl fmt::Display for LogOnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl TryFrom<&str> for LogOnStatus {
    type Error = SsoError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_code)
            .ok_or_else(|| SsoError::UnknownStatusCode(value.to_string()))
    }
}

/// Result of a log-on call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogOnResult {
    /// Wire status code, absent when the response carried no `result`.
    pub status_code: Option<u8>,
    /// Status text, or the escaped response body when there was no code.
    pub status_text: String,
    /// Session token, present only on success.
    pub token: Option<String>,
}

impl LogOnResult {
    /// Interprets a raw `LogOn` response body.
    ///
    /// A body that is not well-formed XML does not fail: the result carries
    /// no code and the escaped body as its text. The same holds for a
    /// missing or empty `result`. A `result` outside the status table is an
    /// error.
    pub fn from_body(body: &str) -> SsoResult<Self> {
        match codec::decode_response(body) {
            Ok(envelope) => Self::from_envelope(&envelope, body),
            Err(SsoError::XmlParse(reason)) => {
                tracing::warn!(%reason, "log-on response is not well-formed XML");
                Ok(Self::unrecognized(body, None))
            }
            Err(e) => Err(e),
        }
    }

    /// Interprets a parsed `LogOn` response.
    pub fn from_envelope(envelope: &ResponseEnvelope, body: &str) -> SsoResult<Self> {
        let token = envelope.element.token().map(str::to_string);
        match envelope.element.result().filter(|code| !code.is_empty()) {
            Some(code) => {
                let status = LogOnStatus::try_from(code)?;
                Ok(Self {
                    status_code: Some(status.code()),
                    status_text: status.message().to_string(),
                    token,
                })
            }
            None => {
                tracing::warn!("log-on response carries no result attribute");
                Ok(Self::unrecognized(body, token))
            }
        }
    }

    fn unrecognized(body: &str, token: Option<String>) -> Self {
        Self {
            status_code: None,
            status_text: codec::escape_markup(body),
            token,
        }
    }

    /// Returns the decoded status, if the response carried one.
    #[must_use]
    pub fn status(&self) -> Option<LogOnStatus> {
        self.status_code.and_then(LogOnStatus::from_code)
    }

    /// Returns true when the log-on succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status() == Some(LogOnStatus::Success)
    }
}
