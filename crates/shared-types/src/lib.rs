//! # Shared Types Crate
//!
//! Calendar types used by both subsystems:
//!
//! - **`CalendarDateTime`**: a naive (zone-less) date and time. Fetched
//!   timestamps are taken as already being in the reference timezone.
//! - **`DayOfWeek`**: `Sunday = 0 … Saturday = 6`, matching the time API.
//! - **`TimeOfDay`**: validated `hour:minute:second` used by reset configs.
//! - **codec**: the string form reset deadlines are persisted in.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: cross-subsystem types are defined here.
//! - **No Time Zones**: nothing in this crate converts between offsets.

pub mod codec;
pub mod entities;
pub mod errors;

pub use codec::{format_moment, parse_moment, PERSISTED_FORMAT};
pub use entities::*;
pub use errors::*;
