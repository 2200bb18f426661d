//! Cross-subsystem integration tests.

pub mod fetch_retry;
pub mod reset_flow;
