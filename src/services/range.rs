//! Bounded time-range generation.
//!
//! Produces the ordered, inclusive sequence of wall-clock times from `from`
//! to `to`, advancing by `step` each iteration. All three inputs are
//! validated independently before any generation begins; a zero step is
//! rejected outright since it could never advance the position.

use crate::core::domain::{TimeOfDay, TimeStep};
use crate::parsing::clock::parse_time_of_day;

/// Which of the three range inputs a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    From,
    To,
    Step,
}

impl TimeField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeField::From => "from",
            TimeField::To => "to",
            TimeField::Step => "step",
        }
    }
}

impl std::fmt::Display for TimeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type for range generation
pub type RangeResult<T> = Result<T, RangeError>;

/// Error type for range generation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// One of the inputs failed the `HH:mm` pattern or range check.
    #[error("invalid {field} time={value}")]
    InvalidTime { field: TimeField, value: String },

    /// The step was `00:00`, which would never advance the position.
    #[error("invalid step time=00:00, step must be at least one minute")]
    ZeroStep,
}

impl RangeError {
    /// The field the error refers to, for per-field form messages.
    pub fn field(&self) -> TimeField {
        match self {
            RangeError::InvalidTime { field, .. } => *field,
            RangeError::ZeroStep => TimeField::Step,
        }
    }
}

/// Generates the inclusive sequence of times from `from` to `to` in `step`
/// increments, parsing all three inputs from strict `HH:mm` strings.
///
/// All three inputs are validated before any generation work happens; the
/// first failure aborts with an error naming the offending field and its raw
/// value, and no partial sequence is ever returned.
///
/// # Examples
///
/// ```
/// use timegrid::services::range::generate_time_range;
///
/// let grid = generate_time_range("00:00", "02:00", "01:00").unwrap();
/// let rendered: Vec<String> = grid.iter().map(|t| t.to_string()).collect();
/// assert_eq!(rendered, ["00:00", "01:00", "02:00"]);
/// ```
///
/// A zero step fails fast instead of looping:
///
/// ```
/// use timegrid::services::range::{generate_time_range, RangeError};
///
/// let err = generate_time_range("00:00", "01:00", "00:00").unwrap_err();
/// assert_eq!(err, RangeError::ZeroStep);
/// ```
pub fn generate_time_range(from: &str, to: &str, step: &str) -> RangeResult<Vec<TimeOfDay>> {
    let from = parse_field(TimeField::From, from)?;
    let to = parse_field(TimeField::To, to)?;
    let step = TimeStep::from(parse_field(TimeField::Step, step)?);

    time_range(from, to, step)
}

/// Typed variant of [`generate_time_range`] for callers that already hold
/// parsed values. Only the zero-step check can fail here.
pub fn time_range(from: TimeOfDay, to: TimeOfDay, step: TimeStep) -> RangeResult<Vec<TimeOfDay>> {
    if step.is_zero() {
        return Err(RangeError::ZeroStep);
    }

    let to_elapsed = to.minutes_from_midnight();
    let span = to_elapsed.saturating_sub(from.minutes_from_midnight());
    if span > 0 && step.total_minutes() > span {
        log::warn!(
            "step {} exceeds span {} -> {}, grid has a single entry",
            step,
            from,
            to
        );
    }

    let mut grid = Vec::new();
    let mut elapsed = from.minutes_from_midnight();
    // Accumulated position may run past the day boundary; the guard sees it
    // before it is ever turned back into a TimeOfDay.
    while elapsed <= to_elapsed {
        match TimeOfDay::from_minutes(elapsed) {
            Some(t) => grid.push(t),
            None => break,
        }
        elapsed += step.total_minutes();
    }

    Ok(grid)
}

/// Number of entries [`time_range`] would produce, without materializing them.
pub fn range_len(from: TimeOfDay, to: TimeOfDay, step: TimeStep) -> RangeResult<usize> {
    if step.is_zero() {
        return Err(RangeError::ZeroStep);
    }
    let from = from.minutes_from_midnight();
    let to = to.minutes_from_midnight();
    if to < from {
        return Ok(0);
    }
    Ok(((to - from) / step.total_minutes()) as usize + 1)
}

fn parse_field(field: TimeField, raw: &str) -> RangeResult<TimeOfDay> {
    parse_time_of_day(raw).map_err(|e| RangeError::InvalidTime {
        field,
        value: e.value,
    })
}
