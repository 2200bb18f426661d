//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the outbound `TimeApiGateway` port.

mod http;
mod mock;

pub use http::HttpTimeApiAdapter;
pub use mock::MockTimeApiGateway;
