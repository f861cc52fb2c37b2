//! # wa-cli
//!
//! Command-line front end for the WebAdvisor SSO client.
//!
//! This crate provides:
//! - Log on, session check and log off against the SSO servlet
//! - Password changes
//! - Management of the `~/.webadvisor/wa.toml` configuration file

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::CliConfig;
pub use error::{CliError, CliResult};
