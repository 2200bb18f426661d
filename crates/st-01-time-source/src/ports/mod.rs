//! Ports module for the Time Source subsystem

pub mod inbound;
pub mod outbound;

pub use inbound::TimeSourceApi;
pub use outbound::TimeApiGateway;
