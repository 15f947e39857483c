use crate::core::domain::TimeOfDay;

/// Error raised when a string is not a valid `HH:mm` wall-clock time.
///
/// Carries the offending raw input so callers can build field-level
/// validation messages around it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time={value}")]
pub struct ParseTimeError {
    pub value: String,
}

impl ParseTimeError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Parses a strict `HH:mm` 24-hour clock string.
///
/// The input must be exactly five characters: a two-digit hour in `00..=23`,
/// a colon, and a two-digit minute in `00..=59`. `"24:00"` is rejected, as is
/// any single-digit or whitespace-padded form.
///
/// # Examples
///
/// ```
/// use timegrid::parsing::clock::parse_time_of_day;
///
/// let t = parse_time_of_day("09:30").unwrap();
/// assert_eq!((t.hour(), t.minute()), (9, 30));
///
/// assert!(parse_time_of_day("24:00").is_err());
/// assert!(parse_time_of_day("9:30").is_err());
/// ```
pub fn parse_time_of_day(input: &str) -> Result<TimeOfDay, ParseTimeError> {
    let bytes = input.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(ParseTimeError::new(input));
    }

    let hour = parse_two_digits(bytes[0], bytes[1]);
    let minute = parse_two_digits(bytes[3], bytes[4]);

    match (hour, minute) {
        (Some(h), Some(m)) => {
            TimeOfDay::new(h, m).ok_or_else(|| ParseTimeError::new(input))
        }
        _ => Err(ParseTimeError::new(input)),
    }
}

/// Boolean form of [`parse_time_of_day`] for call sites that only need a
/// yes/no answer, such as form-field validation rules.
///
/// Delegates to the parser so the acceptance criteria cannot diverge.
pub fn is_valid_time_of_day(input: &str) -> bool {
    parse_time_of_day(input).is_ok()
}

fn parse_two_digits(tens: u8, units: u8) -> Option<u8> {
    if !tens.is_ascii_digit() || !units.is_ascii_digit() {
        return None;
    }
    Some((tens - b'0') * 10 + (units - b'0'))
}
