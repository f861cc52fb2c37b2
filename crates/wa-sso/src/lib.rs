//! WebAdvisor single sign-on client.
//!
//! This crate talks to the WebAdvisor `SingleSignOn` servlet. Every call
//! posts a small XML `Request` envelope and reads back a fixed-shape
//! response envelope:
//!
//! - **Log on** - exchange a username and password for a session token
//! - **Logged on** - check whether a token is still valid
//! - **Log off** - end the session behind a token
//! - **Change password** - replace a user's password
//!
//! # Architecture
//!
//! - [`config`] - selection between the test and production URLs
//! - [`endpoint`] - the parsed, scheme-checked endpoint
//! - [`request`] - request envelope construction
//! - [`codec`] - envelope serialization and response parsing
//! - [`transport`] - the HTTP POST seam
//! - [`status`] - log-on status codes and result record
//! - [`client`] - the four operations
//! - [`error`] - error types
//!
//! # Example
//!
//! ```rust,ignore
//! use wa_sso::{SsoClient, SsoConfig};
//!
//! let client = SsoClient::from_config(&SsoConfig::from_env()?)?;
//! let result = client.log_on("alice", "secret", None).await?;
//! if let Some(token) = result.token.as_deref() {
//!     assert!(client.is_logged_on(token).await?);
//!     client.log_off(token).await?;
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod codec;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod request;
pub mod status;
pub mod transport;

pub use client::SsoClient;
pub use config::{Environment, SsoConfig};
pub use endpoint::{Endpoint, Scheme};
pub use error::{SsoError, SsoResult};
pub use request::{Operation, RequestEnvelope};
pub use status::{LogOnResult, LogOnStatus};
pub use transport::{HttpTransport, Transport};
