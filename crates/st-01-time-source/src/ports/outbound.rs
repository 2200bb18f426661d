//! Driven Ports (SPI - Outbound Dependencies)

use crate::domain::TimeApiResponse;
use crate::error::TimeSourceResult;
use async_trait::async_trait;

/// Remote time API.
///
/// Implementations report transport problems as `Transport`, non-2xx
/// answers as `Status` and undecodable bodies as `MalformedBody`; the
/// service retries all three.
#[async_trait]
pub trait TimeApiGateway: Send + Sync {
    /// Issue one GET against `url` and decode the body.
    async fn fetch_time(&self, url: &str) -> TimeSourceResult<TimeApiResponse>;
}
