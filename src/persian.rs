//! The Persian (Solar Hijri) calendar rule.
//!
//! The Persian calendar is a solar calendar of twelve months: six of 31
//! days, five of 30 days, and a final month of 29 days, or 30 in leap
//! years. Leap years follow a 33-year intercalation cycle that places
//! eight leap years in every 33: year `y` is a leap year exactly when
//! `(25y + 11) mod 33 < 8`. Year 1 begins in March of 622 CE.
//!
//! The two functions here are exact inverses of each other, so a
//! round-trip through either always lands back on the same day.

use local::{split_cycles, Error};


/// Number of days in every 33-year cycle: 25 common years of 365 days,
/// and 8 leap years of 366.
const DAYS_IN_33Y: i64 = 365 * 33 + 8;

/// Day number of 1 Farvardin, year 1: the number of days between that
/// date and the 1st of January, 1970. It falls on the 21st of March, 622
/// in the proleptic Gregorian calendar, which is a long way before 1970,
/// hence the sign.
const EPOCH_DAYS: i64 = -492_268;


/// Returns whether the given Persian year is a leap year.
///
/// ### Examples
///
/// ```
/// assert!(dateconv::persian::is_leap_year(1399));
/// assert!(!dateconv::persian::is_leap_year(1400));
/// ```
pub fn is_leap_year(year: i64) -> bool {
    (25 * year + 11).rem_euclid(33) < 8
}

/// Returns the number of days in the given month of the given year.
pub fn days_in_month(year: i64, month: i8) -> i8 {
    match month {
        1 ..= 6  => 31,
        7 ..= 11 => 30,
        12 => if is_leap_year(year) { 30 } else { 29 },
        _  => 0,
    }
}

/// Converts a Persian date to the number of days since the 1st of
/// January, 1970. The fields are validated first: months run from 1 to
/// 12, days from 1 to the month's length, and years start at 1.
pub fn to_days(year: i64, month: i8, day: i8) -> Result<i64, Error> {
    // Years far past the supported Gregorian span would overflow the
    // cycle arithmetic, so they are rejected before it runs.
    if year < 1 || year > 10_000 {
        return Err(Error::OutOfRange);
    }

    if month < 1 || month > 12 || day < 1 || day > days_in_month(year, month) {
        return Err(Error::OutOfRange);
    }

    Ok(EPOCH_DAYS + days_before_year(year) + days_before_month(month) + (day as i64 - 1))
}

/// Converts a number of days since the 1st of January, 1970 into a
/// Persian (year, month, day) triple.
pub fn from_days(days: i64) -> (i64, i8, i8) {
    let (num_33y_cycles, mut remainder) = split_cycles(days - EPOCH_DAYS, DAYS_IN_33Y);

    // Whittle the leftover days down year by year. Every cycle is the
    // same length, so at most 32 years need skipping.
    let mut year = 33 * num_33y_cycles + 1;
    loop {
        let days_this_year = if is_leap_year(year) { 366 } else { 365 };
        if remainder < days_this_year {
            break;
        }
        remainder -= days_this_year;
        year += 1;
    }

    // The first half of the year is six months of 31 days; everything
    // after day 186 belongs to the 30-day months at the end.
    if remainder < 186 {
        (year, (remainder / 31) as i8 + 1, (remainder % 31) as i8 + 1)
    }
    else {
        let remainder = remainder - 186;
        (year, (remainder / 30) as i8 + 7, (remainder % 30) as i8 + 1)
    }
}

/// Number of days that have elapsed between the calendar's epoch and the
/// start of the given year.
fn days_before_year(year: i64) -> i64 {
    let leap_years_elapsed = year - (25 * year + 11).div_euclid(33);
    365 * (year - 1) + leap_years_elapsed
}

/// Number of days that have elapsed in a year *before* the given month
/// begins, with no leap year check.
fn days_before_month(month: i8) -> i64 {
    let month = month as i64 - 1;
    if month < 6 {
        month * 31
    }
    else {
        186 + (month - 6) * 30
    }
}
