//! # Server-Time Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fake_api.rs       # Scripted HTTP time endpoint (axum)
//! │
//! └── integration/      # Cross-subsystem flows over real HTTP
//!     ├── fetch_retry.rs
//!     └── reset_flow.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p st-tests
//! cargo test -p st-tests integration::reset_flow
//! ```

pub mod fake_api;
pub mod integration;
