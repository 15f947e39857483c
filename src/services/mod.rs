//! Services built on the core value types.
//!
//! - [`range`]: bounded time-range generation from `from`/`to`/`step` inputs
//! - [`validation`]: whole-config validation reports for form fields
//! - [`relative`]: relative-time display formatting

pub mod range;
pub mod relative;
pub mod validation;

pub use range::{generate_time_range, time_range, RangeError, RangeResult, TimeField};
