//! Request envelope construction.
//!
//! A request is a `Request` root holding exactly one operation element.
//! Attributes keep insertion order so the serialized bytes are
//! deterministic.

use std::fmt;

/// The operations understood by the SSO servlet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Authenticate and obtain a session token.
    LogOn,
    /// Check whether a session token is still valid.
    LoggedOn,
    /// End the session behind a token.
    LogOff,
    /// Replace a user's password.
    ChangePassword,
}

impl Operation {
    /// Returns the XML element name of the operation.
    #[must_use]
    pub const fn element_name(self) -> &'static str {
        match self {
            Self::LogOn => "LogOn",
            Self::LoggedOn => "LoggedOn",
            Self::LogOff => "LogOff",
            Self::ChangePassword => "ChangePassword",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_name())
    }
}

/// A request envelope.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestEnvelope {
    operation: Operation,
    attributes: Vec<(&'static str, String)>,
}

impl RequestEnvelope {
    /// Root element name of every request.
    pub const ROOT: &'static str = "Request";

    /// Creates an envelope for the given operation with no attributes.
    #[must_use]
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            attributes: Vec::new(),
        }
    }

    /// Builds a log-on request. An empty account is treated as absent.
    #[must_use]
    pub fn log_on(username: &str, password: &str, account: Option<&str>) -> Self {
        Self::new(Operation::LogOn)
            .attribute("username", username)
            .attribute("password", password)
            .optional_attribute("account", account.filter(|a| !a.is_empty()))
    }

    /// Builds a session check request.
    #[must_use]
    pub fn logged_on(token: &str) -> Self {
        Self::new(Operation::LoggedOn).attribute("token", token)
    }

    /// Builds a log-off request.
    #[must_use]
    pub fn log_off(token: &str) -> Self {
        Self::new(Operation::LogOff).attribute("token", token)
    }

    /// Builds a password change request.
    #[must_use]
    pub fn change_password(username: &str, old_password: &str, new_password: &str) -> Self {
        Self::new(Operation::ChangePassword)
            .attribute("username", username)
            .attribute("password", old_password)
            .attribute("newpassword", new_password)
    }

    /// Appends an attribute.
    #[must_use]
    pub fn attribute(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    /// Appends an attribute only when a value is supplied.
    #[must_use]
    pub fn optional_attribute(self, name: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.attribute(name, value),
            None => self,
        }
    }

    /// Returns the operation.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Returns the attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[(&'static str, String)] {
        &self.attributes
    }

    /// Returns the value of a named attribute.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

// Attribute values carry passwords and tokens.
impl fmt::Debug for RequestEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.attributes.iter().map(|(n, _)| *n).collect();
        f.debug_struct("RequestEnvelope")
            .field("operation", &self.operation)
            .field("attributes", &names)
            .finish()
    }
}
