//! # st-01-time-source
//!
//! Authoritative wall-clock time from a remote time API.
//!
//! ## Overview
//!
//! This subsystem provides:
//! - **Fetch with retry**: one GET against the time API, re-issued after a
//!   fixed one second delay until it succeeds (policy and cap configurable)
//! - **Offset model**: current time = fetched timestamp + monotonic elapsed
//! - **Readiness flag**: false until the first success, never reverts
//! - **Cancellation**: `shutdown()` stops a pending retry loop
//!
//! ## Architecture
//!
//! ```text
//! Host ──fetch()──→ TimeSourceService ──GET──→ TimeApiGateway (HTTP / mock)
//!                        │
//!                        ├── Arc<FetchedTime> snapshot (swapped whole)
//!                        │
//!                        └── current_time() ──→ Reset Scheduler (2)
//! ```
//!
//! ## Retry Loop
//!
//! ```text
//! [REQUEST] ──ok──→ [READY]
//!     │                  │
//!     └─fail─→ [WAIT delay] ──→ [REQUEST]      (shutdown at any point → Cancelled)
//!                                               (max_attempts reached → RetriesExhausted)
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use st_01_time_source::{TimeSourceApi, TimeSourceConfig, TimeSourceService};
//!
//! let source = TimeSourceService::from_config(TimeSourceConfig::default())?;
//! source.fetch().await?;
//!
//! if source.is_ready() {
//!     let now = source.current_time()?;
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

pub use adapters::{HttpTimeApiAdapter, MockTimeApiGateway};
pub use domain::{
    parse_api_datetime, FetchedTime, ManualClock, MonotonicClock, RetryPolicy,
    SystemMonotonicClock, TimeApiResponse, DEFAULT_RETRY_DELAY,
};
pub use error::{TimeSourceError, TimeSourceResult};
pub use ports::inbound::TimeSourceApi;
pub use ports::outbound::TimeApiGateway;
pub use service::{TimeSourceConfig, TimeSourceService, DEFAULT_API_URL};
