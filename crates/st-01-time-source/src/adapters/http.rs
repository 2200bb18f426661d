//! HTTP adapter for the remote time API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::domain::TimeApiResponse;
use crate::error::{TimeSourceError, TimeSourceResult};
use crate::ports::outbound::TimeApiGateway;

/// `reqwest`-backed gateway issuing a plain GET per attempt.
pub struct HttpTimeApiAdapter {
    client: Client,
}

impl HttpTimeApiAdapter {
    /// Create an adapter with the given request and connect timeouts.
    pub fn new(request_timeout: Duration, connect_timeout: Duration) -> TimeSourceResult<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| TimeSourceError::InvalidConfig {
                reason: format!("cannot build HTTP client: {e}"),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl TimeApiGateway for HttpTimeApiAdapter {
    async fn fetch_time(&self, url: &str) -> TimeSourceResult<TimeApiResponse> {
        debug!("[st-01] GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            let reason = if e.is_connect() {
                format!("cannot connect: {e}")
            } else if e.is_timeout() {
                format!("timed out: {e}")
            } else {
                e.to_string()
            };
            TimeSourceError::Transport {
                url: url.to_string(),
                reason,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TimeSourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<TimeApiResponse>()
            .await
            .map_err(|e| TimeSourceError::MalformedBody {
                reason: e.to_string(),
            })
    }
}
