//! The Gregorian side of every conversion: naive local date-times, and the
//! day arithmetic underneath them.

use std::cmp;
use std::error::Error as ErrorTrait;
use std::fmt;

use system::sys_time;
use util::RangeExt;


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y:   i64 = 365 *   4 +  1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of seconds in a day. As everywhere in this library, leap seconds
/// are simply ignored.
const SECONDS_IN_DAY: i64 = 86400;


/// Number of days between **1st January, 1970** and **1st March, 2000**.
///
/// An odd number to use as a reference point, but by having it immediately
/// after a possible leap-year day, and at the end of a 400-year Gregorian
/// cycle, the maths needed to turn a number of days into a date reduces to
/// simple division (with a bit of date-shifting to base a date around this
/// reference point).
const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                            + 7          // plus seven days for leap years...
                            + 31 + 29;   // plus all the days in January and February in 2000.


/// This rather strange triangle is an array of the number of days elapsed
/// at the end of each month, starting at the beginning of March (the first
/// month after the EPOCH above), going backwards, ignoring February.
const TIME_TRIANGLE: &'static [i64; 11] =
    &[31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31 + 31,  // January
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,  // December
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,  // November
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,  // October
      31 + 30 + 31 + 30 + 31 + 31 + 30,  // September
      31 + 30 + 31 + 30 + 31 + 31,  // August
      31 + 30 + 31 + 30 + 31,  // July
      31 + 30 + 31 + 30,  // June
      31 + 30 + 31,  // May
      31 + 30,  // April
      31]; // March


/// A **local date-time** is a Gregorian date paired with a wall-clock time,
/// without a time zone. It is the canonical representation that every
/// conversion in this library starts from or ends up at.
///
/// Months and days are 1-based: month 1 is January, and the first day of a
/// month is day 1. (The conversions juggle three calendars' month numbers
/// at once, so months are kept as plain numbers rather than named variants.)
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct LocalDateTime {
    year:   i64,
    month:  i8,
    day:    i8,
    hour:   i8,
    minute: i8,
    second: i8,
}

impl LocalDateTime {

    /// The earliest Gregorian date-time the conversions support: midnight,
    /// 1st January, 623. Both target calendars are comfortably past the
    /// start of their first year by then.
    pub const MIN: LocalDateTime =
        LocalDateTime { year: 623, month: 1, day: 1, hour: 0, minute: 0, second: 0 };

    /// The latest Gregorian date-time the conversions support: the last
    /// second of 31st December, 9999.
    pub const MAX: LocalDateTime =
        LocalDateTime { year: 9999, month: 12, day: 31, hour: 23, minute: 59, second: 59 };

    /// Creates a new local date-time instance from the given year, month,
    /// day, hour, minute, and second fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dateconv::LocalDateTime;
    ///
    /// let date = LocalDateTime::new(1969, 7, 20, 20, 17, 0).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), 7);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(LocalDateTime::new(2100, 2, 29, 0, 0, 0).is_err());
    /// ```
    pub fn new(year: i64, month: i8, day: i8, hour: i8, minute: i8, second: i8) -> Result<LocalDateTime, Error> {
        if !month.is_within(1..13)
        || !day.is_within(1 .. days_in_month(year, month) + 1) {
            return Err(Error::OutOfRange);
        }

        if !hour.is_within(0..24) || !minute.is_within(0..60) || !second.is_within(0..60) {
            return Err(Error::OutOfRange);
        }

        Ok(LocalDateTime { year, month, day, hour, minute, second })
    }

    /// Creates a new local date-time at midnight on the given day.
    pub fn ymd(year: i64, month: i8, day: i8) -> Result<LocalDateTime, Error> {
        LocalDateTime::new(year, month, day, 0, 0, 0)
    }

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dateconv::LocalDateTime;
    ///
    /// let billennium = LocalDateTime::at(1_000_000_000);
    /// assert_eq!(billennium.year(), 2001);
    /// assert_eq!(billennium.month(), 9);
    /// assert_eq!(billennium.day(), 9);
    /// assert_eq!(billennium.hour(), 1);
    /// assert_eq!(billennium.minute(), 46);
    /// assert_eq!(billennium.second(), 40);
    /// ```
    pub fn at(seconds_since_1970_epoch: i64) -> LocalDateTime {

        // Just split the input value into days and seconds, and let the
        // date and time calculations do all the hard work.
        let (days, secs) = split_cycles(seconds_since_1970_epoch, SECONDS_IN_DAY);
        let (year, month, day) = days_to_ymd(days);

        LocalDateTime {
            year, month, day,
            hour:   (secs / 60 / 60) as i8,
            minute: (secs / 60 % 60) as i8,
            second: (secs % 60) as i8,
        }
    }

    /// Creates a new date-time stamp set to the current time.
    pub fn now() -> LocalDateTime {
        let s = unsafe { sys_time() };
        LocalDateTime::at(s)
    }

    /// Returns this date-time with the time fields reset to midnight.
    pub fn date(&self) -> LocalDateTime {
        LocalDateTime { hour: 0, minute: 0, second: 0, .. *self }
    }

    pub fn year(&self)   -> i64 { self.year }
    pub fn month(&self)  -> i8  { self.month }
    pub fn day(&self)    -> i8  { self.day }
    pub fn hour(&self)   -> i8  { self.hour }
    pub fn minute(&self) -> i8  { self.minute }
    pub fn second(&self) -> i8  { self.second }

    /// The number of days between this date and the 1st of January, 1970,
    /// ignoring the time fields.
    pub(crate) fn to_days(&self) -> i64 {
        ymd_to_days(self.year, self.month, self.day)
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
               self.year, self.month, self.day,
               self.hour, self.minute, self.second)
    }
}

impl fmt::Debug for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDateTime({})", self)
    }
}


/// Computes a Gregorian (year, month, day) triple given the number of days
/// that have passed since the 1st of January, 1970.
pub(crate) fn days_to_ymd(days: i64) -> (i64, i8, i8) {
    let days = days - EPOCH_DIFFERENCE;

    // The Gregorian calendar works in 400-year cycles, which repeat
    // themselves ever after.
    //
    // This calculation works by finding the number of 400-year, 100-year,
    // and 4-year cycles, then constantly subtracting the number of
    // leftover days.
    let (num_400y_cycles, mut remainder) = split_cycles(days, DAYS_IN_400Y);

    let num_100y_cycles = remainder / DAYS_IN_100Y;
    remainder -= num_100y_cycles * DAYS_IN_100Y;  // remainder is now days left in this 100-year cycle

    let num_4y_cycles = remainder / DAYS_IN_4Y;
    remainder -= num_4y_cycles * DAYS_IN_4Y;  // remainder is now days left in this 4-year cycle

    let mut years = cmp::min(remainder / 365, 3);
    remainder -= years * 365;  // remainder is now days left in this year

    // Turn all those cycles into an actual number of years.
    years +=   4 * num_4y_cycles
           + 100 * num_100y_cycles
           + 400 * num_400y_cycles;

    // Work out the month and number of days into the month by scanning
    // the time triangle, finding the month that has the correct number
    // of days elapsed at the end of it.
    // (it's "11 - index" below because the triangle goes backwards)
    let result = TIME_TRIANGLE.iter()
                              .enumerate()
                              .find(|&(_, days)| *days <= remainder);

    let (mut month, month_days) = match result {
        Some((index, days)) => (11 - index as i64, remainder - *days),
        None => (0, remainder),  // No month found? Then it's March.
    };

    // The triangle is based in March, so bump the month number along, and
    // wrap January and February around into the following year.
    month += 2;
    let mut year = years + 2000;
    if month >= 12 {
        year += 1;
        month -= 12;
    }

    // Finally, adjust for human reasons: months and days are 1-based.
    (year, month as i8 + 1, month_days as i8 + 1)
}

/// Calculates the number of days that have elapsed between the 1st of
/// January, 1970, and the given date. The date is assumed to be valid.
pub(crate) fn ymd_to_days(year: i64, month: i8, day: i8) -> i64 {
    let years = year - 2000;
    let (leap_days_elapsed, is_leap) = leap_year_calculations(year);

    // Work out the number of days from the start of 1970 to now, which is
    // a multiple of the number of years...
    years * 365

        // Plus the number of days between the start of 2000 and the start
        // of 1970, to make up the difference because our dates start at
        // 2000 and instants start at 1970...
        + 10_958

        // Plus the number of leap years that have elapsed between now and
        // the start of 2000...
        + leap_days_elapsed

        // Plus the number of days in all the months leading up to the
        // current month...
        + days_before_month(month)

        // Plus an extra leap day for *this* year...
        + if is_leap && month >= 3 { 1 } else { 0 }

        // Plus the number of days in the month so far! (Days are 1-indexed,
        // so we make them 0-indexed here)
        + (day as i64 - 1)
}

/// Returns whether the given Gregorian year is a leap year.
pub fn is_leap_year(year: i64) -> bool {
    leap_year_calculations(year).1
}

/// Performs two related calculations for leap years, returning the results
/// as a two-part tuple:
///
/// 1. The number of leap years that have elapsed prior to this year;
/// 2. Whether this year is a leap year or not.
fn leap_year_calculations(year: i64) -> (i64, bool) {
    let year = year - 2000;

    // This calculation is the reverse of days_to_ymd.
    let (num_400y_cycles, mut remainder) = split_cycles(year, 400);

    // Standard leap-year calculations, performed on the remainder
    let currently_leap_year = remainder == 0 || (remainder % 100 != 0 && remainder % 4 == 0);

    let num_100y_cycles = remainder / 100;
    remainder -= num_100y_cycles * 100;

    let leap_years_elapsed = remainder / 4
        + 97 * num_400y_cycles  // There are 97 leap years in 400 years
        + 24 * num_100y_cycles  // There are 24 leap years in 100 years
        - if currently_leap_year { 1 } else { 0 };

    (leap_years_elapsed, currently_leap_year)
}

/// Returns the number of days in the given month, which depends on whether
/// the year is a leap year or not.
fn days_in_month(year: i64, month: i8) -> i8 {
    match month {
         1 => 31,  2 => if is_leap_year(year) { 29 } else { 28 },
         3 => 31,  4 => 30,
         5 => 31,  6 => 30,
         7 => 31,  8 => 31,
         9 => 30, 10 => 31,
        11 => 30, 12 => 31,
         _ => 0,
    }
}

/// Returns the number of days that have elapsed in a year *before* the
/// given month begins, with no leap year check.
fn days_before_month(month: i8) -> i64 {
    match month {
        1 =>   0,  2 =>  31,  3 =>  59,
        4 =>  90,  5 => 120,  6 => 151,
        7 => 181,  8 => 212,  9 => 243,
       10 => 273, 11 => 304, 12 => 334,
        _ =>   0,
    }
}

/// Split a number of years into a number of year-cycles, and the number
/// of years left over that don't fit into a cycle. This is also used
/// for day-cycles and second-cycles.
///
/// This is essentially a division operation with the result and the
/// remainder, with the difference that a negative value gets 'wrapped
/// around' to be a positive value, owing to the way the modulo operator
/// works for negative values.
pub(crate) fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    let mut cycles    = number_of_periods / cycle_length;
    let mut remainder = number_of_periods % cycle_length;

    if remainder < 0 {
        remainder += cycle_length;
        cycles    -= 1;
    }

    (cycles, remainder)
}


#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "datetime field out of range")
    }
}

impl ErrorTrait for Error {
}
