#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// LogLevel tests

#[test]
fn LogLevel___ordering___trace_less_than_debug() {
    assert!(LogLevel::Trace < LogLevel::Debug);
}

#[test]
fn LogLevel___ordering___warn_less_than_error() {
    assert!(LogLevel::Warn < LogLevel::Error);
}

#[test]
fn LogLevel___ordering___error_less_than_off() {
    assert!(LogLevel::Error < LogLevel::Off);
}

#[test_case("trace", LogLevel::Trace)]
#[test_case("DEBUG", LogLevel::Debug)]
#[test_case(" info ", LogLevel::Info)]
#[test_case("warning", LogLevel::Warn)]
#[test_case("Error", LogLevel::Error)]
#[test_case("none", LogLevel::Off)]
fn LogLevel___parse___accepts_known_names(input: &str, expected: LogLevel) {
    assert_eq!(LogLevel::parse(input), Some(expected));
}

#[test]
fn LogLevel___parse_unknown___returns_none() {
    assert_eq!(LogLevel::parse("loud"), None);
}

#[test]
fn LogLevel___display___is_uppercase() {
    assert_eq!(LogLevel::Warn.to_string(), "WARN");
}

#[test]
fn LogLevel___as_directive___round_trips_through_parse() {
    for level in [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Off,
    ] {
        assert_eq!(LogLevel::parse(level.as_directive()), Some(level));
    }
}
