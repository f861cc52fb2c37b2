//! End-to-End Integration Tests
//!
//! These tests drive `wa_sso::SsoClient` over real HTTP against a wiremock
//! server standing in for the WebAdvisor `SingleSignOn` servlet.

mod common;
mod operations;
mod transport;
