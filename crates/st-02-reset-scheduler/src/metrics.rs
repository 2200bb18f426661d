//! # Reset Scheduler Metrics
//!
//! Enable with the `metrics` feature.
//!
//! ## Metrics Exported
//!
//! - `reset_scheduler_claims_total` - Counter of successful claims (by kind)
//! - `reset_scheduler_claims_rejected_total` - Counter of claims made while locked (by kind)

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{register_int_counter_vec, IntCounterVec};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Successful claims, labeled by kind
    pub static ref CLAIMS: IntCounterVec = register_int_counter_vec!(
        "reset_scheduler_claims_total",
        "Total number of rewards claimed",
        &["kind"]
    )
    .expect("Failed to create CLAIMS metric");

    /// Rejected claims, labeled by kind
    pub static ref CLAIMS_REJECTED: IntCounterVec = register_int_counter_vec!(
        "reset_scheduler_claims_rejected_total",
        "Total number of claims attempted while locked",
        &["kind"]
    )
    .expect("Failed to create CLAIMS_REJECTED metric");
}

#[cfg(feature = "metrics")]
pub fn record_claim(kind: &str) {
    CLAIMS.with_label_values(&[kind]).inc();
}

#[cfg(feature = "metrics")]
pub fn record_claim_rejected(kind: &str) {
    CLAIMS_REJECTED.with_label_values(&[kind]).inc();
}

#[cfg(not(feature = "metrics"))]
pub fn record_claim(_kind: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_claim_rejected(_kind: &str) {}
