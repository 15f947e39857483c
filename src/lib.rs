//! timegrid - Bounded time-of-day sequence generation
//!
//! Parses `from`/`to`/`step` wall-clock strings and produces the ordered,
//! inclusive grid of times a picker component renders as selectable options.
//! Validation failures name the offending field and carry its raw value so
//! forms can surface per-field messages.

pub mod core;
pub mod io;
pub mod parsing;
pub mod services;

pub use crate::core::domain::{TimeOfDay, TimeStep};
pub use crate::parsing::clock::{is_valid_time_of_day, parse_time_of_day, ParseTimeError};
pub use crate::services::range::{generate_time_range, time_range, RangeError, TimeField};
