//! Scripted in-memory gateway for tests and demo mode.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::TimeApiResponse;
use crate::error::TimeSourceResult;
use crate::ports::outbound::TimeApiGateway;

/// Replays queued results in order, then falls back to a fixed response.
#[derive(Default)]
pub struct MockTimeApiGateway {
    script: Mutex<VecDeque<TimeSourceResult<TimeApiResponse>>>,
    fallback: Mutex<Option<TimeApiResponse>>,
    requested_urls: Mutex<Vec<String>>,
}

impl MockTimeApiGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway that always answers with `response`.
    pub fn always(response: TimeApiResponse) -> Self {
        let mock = Self::new();
        mock.set_fallback(response);
        mock
    }

    /// Queue one result.
    pub fn push(&self, result: TimeSourceResult<TimeApiResponse>) {
        self.script.lock().push_back(result);
    }

    pub fn set_fallback(&self, response: TimeApiResponse) {
        *self.fallback.lock() = Some(response);
    }

    /// URLs requested so far, oldest first.
    pub fn requested_urls(&self) -> Vec<String> {
        self.requested_urls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requested_urls.lock().len()
    }
}

#[async_trait]
impl TimeApiGateway for MockTimeApiGateway {
    async fn fetch_time(&self, url: &str) -> TimeSourceResult<TimeApiResponse> {
        self.requested_urls.lock().push(url.to_string());

        if let Some(next) = self.script.lock().pop_front() {
            return next;
        }

        match self.fallback.lock().clone() {
            Some(response) => Ok(response),
            None => Err(crate::error::TimeSourceError::Transport {
                url: url.to_string(),
                reason: "mock gateway has no response queued".to_string(),
            }),
        }
    }
}
