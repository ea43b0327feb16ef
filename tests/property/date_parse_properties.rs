// Property-based tests for display-date parsing
// Valid dates round-trip; anything else degrades to today without panicking

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use test_case::test_case;

use property_calendar::utils::date::{format_display_date, parse_display_date, MONTH_ABBREVIATIONS};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

proptest! {
    /// Property: every real calendar date survives format then parse
    #[test]
    fn prop_valid_dates_round_trip(
        year in 1900..2200i32,
        month in 1..=12u32,
        day in 1..=28u32,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let text = format!("{} {}, {}", day, MONTH_ABBREVIATIONS[(month - 1) as usize], year);
        prop_assert_eq!(&text, &format_display_date(date));

        let parsed = parse_display_date(&text, today());
        prop_assert_eq!(parsed.year(), year);
        prop_assert_eq!(parsed.month0(), month - 1);
        prop_assert_eq!(parsed.day(), day);
    }

    /// Property: arbitrary input never panics and always yields a date
    #[test]
    fn prop_arbitrary_input_never_panics(input in ".{0,40}") {
        let _ = parse_display_date(&input, today());
    }

    /// Property: lowercase month names are rejected
    #[test]
    fn prop_lowercase_month_falls_back(day in 1..=28u32, month in 0..12usize, year in 1990..2100i32) {
        let text = format!("{} {}, {}", day, MONTH_ABBREVIATIONS[month].to_lowercase(), year);
        prop_assert_eq!(parse_display_date(&text, today()), today());
    }
}

#[test_case(""; "empty")]
#[test_case("   "; "blank")]
#[test_case("24 Nov"; "two tokens")]
#[test_case("XX Nov, 2025"; "bad day")]
#[test_case("24 Foo, 2025"; "bad month")]
#[test_case("24 Nov, abcd"; "bad year")]
#[test_case("24  Nov, 2025"; "double space")]
#[test_case("24\tNov,\t2025"; "tab separated")]
#[test_case(" 24 Nov, 2025"; "leading space")]
#[test_case("-9223372036854775808 Jan, 2025"; "minimum day number")]
fn test_malformed_input_is_today(input: &str) {
    assert_eq!(parse_display_date(input, today()), today());
}

#[test]
fn test_november_example() {
    let parsed = parse_display_date("24 Nov, 2025", today());
    assert_eq!((parsed.year(), parsed.month0(), parsed.day()), (2025, 10, 24));
}
