//! Ports module for the Reset Scheduler subsystem

pub mod inbound;
pub mod outbound;

pub use inbound::ResetSchedulerApi;
pub use outbound::{CurrentTimeProvider, KeyValueStore};
