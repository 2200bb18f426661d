//! # Time Source Metrics
//!
//! Prometheus metrics for the fetch loop.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! st-01-time-source = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `time_source_fetch_attempts_total` - Counter of requests issued
//! - `time_source_fetch_failures_total` - Counter of failed attempts (by kind)
//! - `time_source_fetch_successes_total` - Counter of installed snapshots
//! - `time_source_ready` - Gauge, 1 once a snapshot exists

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{
    register_gauge, register_int_counter, register_int_counter_vec, Gauge, IntCounter,
    IntCounterVec,
};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Total requests issued
    pub static ref FETCH_ATTEMPTS: IntCounter = register_int_counter!(
        "time_source_fetch_attempts_total",
        "Total number of time API requests issued"
    )
    .expect("Failed to create FETCH_ATTEMPTS metric");

    /// Failed attempts, labeled by error kind
    pub static ref FETCH_FAILURES: IntCounterVec = register_int_counter_vec!(
        "time_source_fetch_failures_total",
        "Total number of failed time API requests",
        &["kind"]
    )
    .expect("Failed to create FETCH_FAILURES metric");

    /// Successful fetches
    pub static ref FETCH_SUCCESSES: IntCounter = register_int_counter!(
        "time_source_fetch_successes_total",
        "Total number of successful time fetches"
    )
    .expect("Failed to create FETCH_SUCCESSES metric");

    /// Readiness flag
    pub static ref READY: Gauge = register_gauge!(
        "time_source_ready",
        "Whether a fetched time is available (0=no, 1=yes)"
    )
    .expect("Failed to create READY metric");
}

#[cfg(feature = "metrics")]
pub fn record_fetch_attempt() {
    FETCH_ATTEMPTS.inc();
}

#[cfg(feature = "metrics")]
pub fn record_fetch_failure(kind: &str) {
    FETCH_FAILURES.with_label_values(&[kind]).inc();
}

#[cfg(feature = "metrics")]
pub fn record_fetch_success() {
    FETCH_SUCCESSES.inc();
    READY.set(1.0);
}

// =============================================================================
// NO-OP IMPLEMENTATIONS (when metrics feature disabled)
// =============================================================================

#[cfg(not(feature = "metrics"))]
pub fn record_fetch_attempt() {}

#[cfg(not(feature = "metrics"))]
pub fn record_fetch_failure(_kind: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_fetch_success() {}
