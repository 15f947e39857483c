//! Validation report for time-picker range configurations.
//!
//! Where [`crate::services::range::generate_time_range`] stops at the first
//! bad input, this module checks every field of a configuration and reports
//! all problems at once, so a form can annotate each invalid field with its
//! own message.
//!
//! Validation rules include:
//! - `HH:mm` pattern and range checks on `from`, `to`, and `step`
//! - Zero-step rejection
//! - Inverted range detection (`to` earlier than `from`)

use crate::core::domain::TimeStep;
use crate::io::loaders::RangeConfig;
use crate::parsing::clock::parse_time_of_day;
use crate::services::range::TimeField;

/// Severity of a reported issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// A single field-level validation issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: TimeField,
    pub severity: Severity,
    pub current_value: String,
    pub expected: &'static str,
    pub description: String,
}

impl FieldIssue {
    fn error(field: TimeField, current_value: &str, expected: &'static str) -> Self {
        Self {
            field,
            severity: Severity::Error,
            current_value: current_value.to_string(),
            expected,
            description: format!("invalid {} time={}", field, current_value),
        }
    }
}

/// Validates every field of a range configuration and returns all issues
/// found; an empty vector means the configuration will generate cleanly.
///
/// # Examples
///
/// ```
/// use timegrid::io::loaders::RangeConfig;
/// use timegrid::services::validation::validate_range_config;
///
/// let config = RangeConfig {
///     from: "AA:BB".to_string(),
///     to: "99:99".to_string(),
///     step: "00:30".to_string(),
/// };
/// let issues = validate_range_config(&config);
/// assert_eq!(issues.len(), 2);
/// ```
pub fn validate_range_config(config: &RangeConfig) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    let from = match parse_time_of_day(&config.from) {
        Ok(t) => Some(t),
        Err(_) => {
            issues.push(FieldIssue::error(
                TimeField::From,
                &config.from,
                "HH:mm between 00:00 and 23:59",
            ));
            None
        }
    };

    let to = match parse_time_of_day(&config.to) {
        Ok(t) => Some(t),
        Err(_) => {
            issues.push(FieldIssue::error(
                TimeField::To,
                &config.to,
                "HH:mm between 00:00 and 23:59",
            ));
            None
        }
    };

    match parse_time_of_day(&config.step) {
        Ok(t) => {
            if TimeStep::from(t).is_zero() {
                issues.push(FieldIssue {
                    field: TimeField::Step,
                    severity: Severity::Error,
                    current_value: config.step.clone(),
                    expected: "at least 00:01",
                    description: "step must advance the clock".to_string(),
                });
            }
        }
        Err(_) => {
            issues.push(FieldIssue::error(
                TimeField::Step,
                &config.step,
                "HH:mm between 00:01 and 23:59",
            ));
        }
    }

    // Range-level check only makes sense once both endpoints parse
    if let (Some(from), Some(to)) = (from, to) {
        if to < from {
            issues.push(FieldIssue {
                field: TimeField::To,
                severity: Severity::Warning,
                current_value: config.to.clone(),
                expected: "a time at or after `from`",
                description: format!("range {}-{} is inverted and yields no options", from, to),
            });
        }
    }

    issues
}
