//! Core domain models for time-of-day ranges.
//!
//! This module defines the fundamental value types used throughout the crate:
//! wall-clock times, step durations, and the elapsed-minutes measure.

pub mod domain;

pub use domain::{TimeOfDay, TimeStep, MINUTES_PER_DAY};
