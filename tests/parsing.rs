extern crate dateconv;

use dateconv::{persian_to_gregorian, hijri_to_gregorian,
               Error, LocalDateTime, TimePrecision};


fn date(year: i64, month: i8, day: i8) -> LocalDateTime {
    LocalDateTime::ymd(year, month, day).unwrap()
}

fn time(year: i64, month: i8, day: i8, hour: i8, minute: i8, second: i8) -> LocalDateTime {
    LocalDateTime::new(year, month, day, hour, minute, second).unwrap()
}


#[test]
fn a_fully_specified_time_is_deterministic() {
    assert_eq!(persian_to_gregorian("1400/1/1 - 23:59:59", TimePrecision::Full).unwrap(),
               time(2021, 3, 21, 23, 59, 59));
    assert_eq!(hijri_to_gregorian("1446/1/1 - 0:0:0", TimePrecision::Full).unwrap(),
               date(2024, 7, 8));
}

#[test]
fn whitespace_between_tokens_is_ignored() {
    assert_eq!(persian_to_gregorian("  1400 / 1 / 1  -  9 : 30 : 00 ", TimePrecision::Full).unwrap(),
               time(2021, 3, 21, 9, 30, 0));
}

#[test]
fn single_digit_time_tokens() {
    assert_eq!(persian_to_gregorian("1400/1/1 - 9:5:7", TimePrecision::Full).unwrap(),
               time(2021, 3, 21, 9, 5, 7));
}

#[test]
fn the_precision_masks_fields_the_string_carries() {
    let text = "1400/1/1 - 9:30:45";
    assert_eq!(persian_to_gregorian(text, TimePrecision::None).unwrap(),
               date(2021, 3, 21));
    assert_eq!(persian_to_gregorian(text, TimePrecision::HourOnly).unwrap(),
               time(2021, 3, 21, 9, 0, 0));
    assert_eq!(persian_to_gregorian(text, TimePrecision::HourAndMinute).unwrap(),
               time(2021, 3, 21, 9, 30, 0));
}

#[test]
fn precision_none_never_needs_a_time_segment() {
    assert_eq!(persian_to_gregorian("1400/1/1", TimePrecision::None).unwrap(),
               date(2021, 3, 21));
    assert_eq!(persian_to_gregorian("1400/1/1 - ", TimePrecision::None).unwrap(),
               date(2021, 3, 21));
}

#[test]
fn tokens_past_the_seconds_are_ignored() {
    assert_eq!(persian_to_gregorian("1400/1/1 - 9:30:45:99", TimePrecision::Full).unwrap(),
               time(2021, 3, 21, 9, 30, 45));
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(persian_to_gregorian("", TimePrecision::None), Err(Error::EmptyInput));
    assert_eq!(persian_to_gregorian("   ", TimePrecision::None), Err(Error::EmptyInput));
    assert_eq!(hijri_to_gregorian("", TimePrecision::Full), Err(Error::EmptyInput));
}

#[test]
fn wrong_numbers_of_date_components_are_rejected() {
    assert_eq!(persian_to_gregorian("1402/13", TimePrecision::None),
               Err(Error::WrongComponentCount { count: 2 }));
    assert_eq!(persian_to_gregorian("1402", TimePrecision::None),
               Err(Error::WrongComponentCount { count: 1 }));
    assert_eq!(hijri_to_gregorian("1446/1/1/1", TimePrecision::None),
               Err(Error::WrongComponentCount { count: 4 }));
}

#[test]
fn non_numeric_tokens_are_rejected() {
    assert_eq!(persian_to_gregorian("1402/1/1 - ab:00", TimePrecision::Full),
               Err(Error::InvalidCharacter { token: "ab".into() }));
    assert_eq!(persian_to_gregorian("140x/1/1", TimePrecision::None),
               Err(Error::InvalidCharacter { token: "140x".into() }));
    assert_eq!(hijri_to_gregorian("1446/one/1", TimePrecision::None),
               Err(Error::InvalidCharacter { token: "one".into() }));
}

#[test]
fn impossible_calendar_dates_are_rejected() {
    assert!(persian_to_gregorian("1402/13/1", TimePrecision::None).is_err());
    assert!(persian_to_gregorian("1400/12/30", TimePrecision::None).is_err());
    assert!(persian_to_gregorian("1402/7/31", TimePrecision::None).is_err());
    assert!(hijri_to_gregorian("1446/2/30", TimePrecision::None).is_err());
    assert!(hijri_to_gregorian("1446/12/30", TimePrecision::None).is_err());
}

#[test]
fn absurdly_large_years_are_rejected() {
    // Large enough to overflow the cycle arithmetic if it ever ran.
    assert!(persian_to_gregorian("9000000000000000000/1/1", TimePrecision::None).is_err());
    assert!(hijri_to_gregorian("9000000000000000000/1/1", TimePrecision::None).is_err());
    assert!(persian_to_gregorian("10001/1/1", TimePrecision::None).is_err());
    assert!(hijri_to_gregorian("10001/1/1", TimePrecision::None).is_err());
}

#[test]
fn out_of_range_time_fields_are_rejected() {
    assert!(persian_to_gregorian("1400/1/1 - 24:00:00", TimePrecision::Full).is_err());
    assert!(persian_to_gregorian("1400/1/1 - 23:60:00", TimePrecision::Full).is_err());
    assert!(persian_to_gregorian("1400/1/1 - 23:59:60", TimePrecision::Full).is_err());
}
