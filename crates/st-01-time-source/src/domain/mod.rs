//! Domain module for the Time Source subsystem
//!
//! ## Core Modules
//! - clock: monotonic readings (system and manual)
//! - fetched_time: immutable snapshot + offset model
//! - parser: time API body extraction
//! - retry: delay policy for the fetch loop

pub mod clock;
pub mod fetched_time;
pub mod parser;
pub mod retry;

pub use clock::{ManualClock, MonotonicClock, SystemMonotonicClock};
pub use fetched_time::FetchedTime;
pub use parser::{parse_api_datetime, TimeApiResponse};
pub use retry::{RetryPolicy, DEFAULT_RETRY_DELAY};
