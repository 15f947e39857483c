//! Parsers for wall-clock time strings.
//!
//! This module provides the strict `HH:mm` parser and its boolean predicate
//! form used by form-field validation.
//!
//! # Example
//!
//! ```
//! use timegrid::parsing::clock::parse_time_of_day;
//!
//! let t = parse_time_of_day("08:15").expect("valid clock string");
//! assert_eq!(t.minutes_from_midnight(), 495);
//! ```

pub mod clock;


pub use clock::{is_valid_time_of_day, parse_time_of_day, ParseTimeError};
