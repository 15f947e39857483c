//! Integration tests for the full parse -> validate -> generate pipeline.
//!
//! These tests ensure that:
//! 1. The parser and predicate agree on the accepted grammar
//! 2. The generator produces inclusive, evenly spaced grids
//! 3. Failures name the offending field and carry its raw value
//! 4. Degenerate inputs (zero step, inverted range) terminate cleanly

use timegrid::io::loaders::{RangeConfig, RangeConfigLoader};
use timegrid::services::range::{generate_time_range, RangeError, TimeField};
use timegrid::services::validation::{validate_range_config, Severity};
use timegrid::{is_valid_time_of_day, parse_time_of_day, TimeOfDay};

// ==================== Helper Functions ====================

fn rendered(grid: &[TimeOfDay]) -> Vec<String> {
    grid.iter().map(|t| t.to_string()).collect()
}

// ==================== Parsing ====================

#[test]
fn parser_and_predicate_share_one_grammar() {
    for raw in ["00:00", "09:30", "12:00", "23:59"] {
        assert!(is_valid_time_of_day(raw));
        assert!(parse_time_of_day(raw).is_ok());
    }
    for raw in ["24:00", "1000", "a1000", "00:60", "7:30", ""] {
        assert!(!is_valid_time_of_day(raw), "should reject {raw:?}");
        assert!(parse_time_of_day(raw).is_err());
    }
}

// ==================== Generation ====================

#[test]
fn hourly_two_hour_window() {
    let grid = generate_time_range("00:00", "02:00", "01:00").unwrap();
    assert_eq!(rendered(&grid), ["00:00", "01:00", "02:00"]);
}

#[test]
fn half_hourly_two_hour_window() {
    let grid = generate_time_range("00:00", "02:00", "00:30").unwrap();
    assert_eq!(
        rendered(&grid),
        ["00:00", "00:30", "01:00", "01:30", "02:00"]
    );
}

#[test]
fn five_minute_quarter_hour_window() {
    let grid = generate_time_range("00:00", "00:15", "00:05").unwrap();
    assert_eq!(rendered(&grid), ["00:00", "00:05", "00:10", "00:15"]);
}

#[test]
fn twenty_four_hourly_options_cover_the_day() {
    let grid = generate_time_range("00:00", "23:00", "01:00").unwrap();
    assert_eq!(grid.len(), 24);
    assert!(rendered(&grid).contains(&"00:00".to_string()));
    assert!(rendered(&grid).contains(&"23:00".to_string()));
}

#[test]
fn equal_endpoints_yield_the_single_start_time() {
    let grid = generate_time_range("05:00", "05:00", "00:10").unwrap();
    assert_eq!(rendered(&grid), ["05:00"]);
}

// ==================== Failure semantics ====================

#[test]
fn bad_from_aborts_before_generation() {
    let err = generate_time_range("AA:BB", "02:00", "00:30").unwrap_err();
    assert_eq!(err.field(), TimeField::From);
    assert_eq!(err.to_string(), "invalid from time=AA:BB");
}

#[test]
fn bad_to_aborts_before_generation() {
    let err = generate_time_range("01:00", "99:99", "00:30").unwrap_err();
    assert_eq!(err.field(), TimeField::To);
    assert_eq!(err.to_string(), "invalid to time=99:99");
}

#[test]
fn bad_step_aborts_before_generation() {
    let err = generate_time_range("01:00", "11:00", "00:99").unwrap_err();
    assert_eq!(err.field(), TimeField::Step);
    assert_eq!(err.to_string(), "invalid step time=00:99");
}

#[test]
fn zero_step_fails_instead_of_hanging() {
    let err = generate_time_range("00:00", "01:00", "00:00").unwrap_err();
    assert_eq!(err, RangeError::ZeroStep);
}

// ==================== Config loading into generation ====================

#[test]
fn json_config_drives_the_generator() {
    let config = RangeConfigLoader::load_from_json_str(
        r#"{"from": "08:00", "to": "10:00", "step": "00:30"}"#,
    )
    .unwrap();
    let grid = config.generate().unwrap();
    assert_eq!(
        rendered(&grid),
        ["08:00", "08:30", "09:00", "09:30", "10:00"]
    );
}

#[test]
fn invalid_config_surfaces_per_field_issues() {
    let config = RangeConfig {
        from: "8:00".to_string(),
        to: "17:00".to_string(),
        step: "00:00".to_string(),
    };
    let issues = validate_range_config(&config);
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].field, TimeField::From);
    assert_eq!(issues[1].field, TimeField::Step);
    assert!(issues.iter().all(|i| i.severity == Severity::Error));

    // The strict generator agrees, stopping at the first bad field
    let err = config.generate().unwrap_err();
    assert_eq!(err.field(), TimeField::From);
}
