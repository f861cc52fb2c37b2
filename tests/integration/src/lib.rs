//! End-to-end tests for the WebAdvisor SSO client live under `tests/`.
