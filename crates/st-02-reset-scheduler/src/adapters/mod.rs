//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits:
//! - `CurrentTimeProvider` over the Time Source subsystem, or a settable fixed time
//! - `KeyValueStore` in memory or as a JSON file on disk

mod fixed_time;
mod json_file_store;
mod memory_store;
mod time_source;

pub use fixed_time::FixedTimeProvider;
pub use json_file_store::JsonFileKeyValueStore;
pub use memory_store::InMemoryKeyValueStore;
pub use time_source::TimeSourceAdapter;
