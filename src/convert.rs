//! The public conversion surface: formatting Gregorian date-times as
//! Persian or Hijri strings, and parsing those strings back again.
//!
//! Formatted dates look like `1400/1/1`, optionally followed by a time
//! whose granularity is picked by a [`TimePrecision`](enum.TimePrecision.html):
//! the date components at their natural width, the time components
//! zero-padded to two digits.
//!
//! Parsing is lenient about the time. A missing hour, minute, or second is
//! filled in from the wall clock at the moment of parsing, and the
//! precision then masks off whatever the caller did not ask for. So with
//! `TimePrecision::None` the result is always midnight, however the clock
//! reads; with `TimePrecision::Full` a bare `1400/1/1` parses to that day
//! at the current time.

use std::error::Error as ErrorTrait;
use std::fmt;
use std::str::FromStr;

use hijri::Hijri;
use local::{self, LocalDateTime};
use persian;
use util::zero_pad;


/// How much of the time of day to include when formatting, or to honour
/// when parsing.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum TimePrecision {

    /// The date alone. Parsed dates are set to midnight.
    None,

    /// The hour, with the minutes fixed at `00`.
    HourOnly,

    /// The hour and minute.
    HourAndMinute,

    /// The hour, minute, and second.
    Full,
}


/// A formatting or parsing failure.
#[derive(PartialEq, Debug, Clone)]
pub enum Error {

    /// The Gregorian date falls before the earliest supported instant.
    BeforeMinimum {
        date: LocalDateTime,
        minimum: LocalDateTime,
    },

    /// The Gregorian date falls after the latest supported instant.
    AfterMaximum {
        date: LocalDateTime,
        maximum: LocalDateTime,
    },

    /// The input string was empty where a formatted date was required.
    EmptyInput,

    /// The date segment did not have exactly three components.
    WrongComponentCount {
        count: usize,
    },

    /// A component that should have been a number was not one.
    InvalidCharacter {
        token: String,
    },

    /// The components were numbers, but did not form a real date.
    InvalidDate(local::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::BeforeMinimum { ref date, ref minimum } => {
                write!(f, "input date {} is invalid, minimum supported date is '{}'", date, minimum)
            }
            Error::AfterMaximum { ref date, ref maximum } => {
                write!(f, "input date {} is invalid, maximum supported date is '{}'", date, maximum)
            }
            Error::EmptyInput => {
                write!(f, "input date string is null or empty")
            }
            Error::WrongComponentCount { count } => {
                write!(f, "expected a year, month, and day, found {} components", count)
            }
            Error::InvalidCharacter { ref token } => {
                write!(f, "'{}' is not a number", token)
            }
            Error::InvalidDate(ref error) => {
                write!(f, "invalid date: {}", error)
            }
        }
    }
}

impl ErrorTrait for Error {
    fn source(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        match *self {
            Error::InvalidDate(ref error) => Some(error),
            _ => None,
        }
    }
}


/// Formats the given Gregorian date-time as a Persian date string.
///
/// ### Examples
///
/// ```
/// use dateconv::{gregorian_to_persian, LocalDateTime, TimePrecision};
///
/// let date = LocalDateTime::new(2021, 3, 21, 9, 30, 15).unwrap();
/// assert_eq!(gregorian_to_persian(date, TimePrecision::None).unwrap(),
///            "1400/1/1");
/// assert_eq!(gregorian_to_persian(date, TimePrecision::Full).unwrap(),
///            "1400/1/1 - 09:30:15");
/// ```
pub fn gregorian_to_persian(date: LocalDateTime, precision: TimePrecision) -> Result<String, Error> {
    check_range(date)?;
    let (year, month, day) = persian::from_days(date.to_days());
    Ok(format_date(year, month, day, &date, precision))
}

/// Formats the given Gregorian date-time as a Hijri date string, using the
/// civil tabular calendar.
pub fn gregorian_to_hijri(date: LocalDateTime, precision: TimePrecision) -> Result<String, Error> {
    gregorian_to_hijri_with(Hijri::civil(), date, precision)
}

/// Formats the given Gregorian date-time as a Hijri date string, using a
/// calendar with an explicit adjustment.
pub fn gregorian_to_hijri_with(calendar: Hijri, date: LocalDateTime, precision: TimePrecision) -> Result<String, Error> {
    check_range(date)?;
    let (year, month, day) = calendar.from_days(date.to_days());
    Ok(format_date(year, month, day, &date, precision))
}

/// Parses a Persian date string into a Gregorian date-time.
///
/// ### Examples
///
/// ```
/// use dateconv::{persian_to_gregorian, LocalDateTime, TimePrecision};
///
/// let date = persian_to_gregorian("1400/1/1 - 09:30:15", TimePrecision::Full).unwrap();
/// assert_eq!(date, LocalDateTime::new(2021, 3, 21, 9, 30, 15).unwrap());
/// ```
pub fn persian_to_gregorian(text: &str, precision: TimePrecision) -> Result<LocalDateTime, Error> {
    let pieces = parse_pieces(text)?;
    let days = persian::to_days(pieces.year, pieces.month, pieces.day)
                       .map_err(Error::InvalidDate)?;
    assemble(days, &pieces, precision)
}

/// Parses a Hijri date string into a Gregorian date-time, using the civil
/// tabular calendar.
pub fn hijri_to_gregorian(text: &str, precision: TimePrecision) -> Result<LocalDateTime, Error> {
    hijri_to_gregorian_with(Hijri::civil(), text, precision)
}

/// Parses a Hijri date string into a Gregorian date-time, using a calendar
/// with an explicit adjustment.
pub fn hijri_to_gregorian_with(calendar: Hijri, text: &str, precision: TimePrecision) -> Result<LocalDateTime, Error> {
    let pieces = parse_pieces(text)?;
    let days = calendar.to_days(pieces.year, pieces.month, pieces.day)
                       .map_err(Error::InvalidDate)?;
    assemble(days, &pieces, precision)
}


/// Checks that a date falls within the span the conversions support.
fn check_range(date: LocalDateTime) -> Result<(), Error> {
    if date < LocalDateTime::MIN {
        Err(Error::BeforeMinimum { date, minimum: LocalDateTime::MIN })
    }
    else if date > LocalDateTime::MAX {
        Err(Error::AfterMaximum { date, maximum: LocalDateTime::MAX })
    }
    else {
        Ok(())
    }
}

/// Renders a converted date, taking the time fields from the original
/// Gregorian date-time. Date components stay at their natural width, time
/// components get zero-padded to two digits.
fn format_date(year: i64, month: i8, day: i8, time: &LocalDateTime, precision: TimePrecision) -> String {
    let date = format!("{}/{}/{}", year, month, day);

    match precision {
        TimePrecision::None => {
            date
        }
        TimePrecision::HourOnly => {
            format!("{} - {}:00", date, zero_pad(time.hour()))
        }
        TimePrecision::HourAndMinute => {
            format!("{} - {}:{}", date, zero_pad(time.hour()), zero_pad(time.minute()))
        }
        TimePrecision::Full => {
            format!("{} - {}:{}:{}", date, zero_pad(time.hour()), zero_pad(time.minute()), zero_pad(time.second()))
        }
    }
}


/// The raw fields of a parsed date string, before any calendar or clock
/// gets involved. The time fields stay optional so the clock defaults can
/// be filled in later, and only if they turn out to be needed.
struct Pieces {
    year:   i64,
    month:  i8,
    day:    i8,
    hour:   Option<i8>,
    minute: Option<i8>,
    second: Option<i8>,
}

/// Parses one numeric token, reporting the token itself on failure.
fn parse_token<T: FromStr>(token: &str) -> Result<T, Error> {
    token.parse().map_err(|_| Error::InvalidCharacter { token: token.to_owned() })
}

/// Splits a date string into its numeric pieces without interpreting them.
fn parse_pieces(text: &str) -> Result<Pieces, Error> {
    if text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    // Only the first dash separates the date from the time, so a negative
    // number in the time segment cannot smuggle in a third segment.
    let mut segments = text.splitn(2, '-');
    let date_segment = match segments.next() {
        Some(segment) => segment,
        None => return Err(Error::EmptyInput),
    };
    let time_segment = segments.next();

    let date_tokens: Vec<_> = date_segment.split('/').map(str::trim).collect();
    if date_tokens.len() != 3 {
        return Err(Error::WrongComponentCount { count: date_tokens.len() });
    }

    let mut pieces = Pieces {
        year:   parse_token(date_tokens[0])?,
        month:  parse_token(date_tokens[1])?,
        day:    parse_token(date_tokens[2])?,
        hour:   None,
        minute: None,
        second: None,
    };

    // A present time overrides the defaults positionally. Tokens past the
    // third are ignored, and a blank segment is the same as no segment.
    if let Some(segment) = time_segment {
        if !segment.trim().is_empty() {
            let mut time_tokens = segment.split(':').map(str::trim);

            if let Some(token) = time_tokens.next() {
                pieces.hour = Some(parse_token(token)?);
            }
            if let Some(token) = time_tokens.next() {
                pieces.minute = Some(parse_token(token)?);
            }
            if let Some(token) = time_tokens.next() {
                pieces.second = Some(parse_token(token)?);
            }
        }
    }

    Ok(pieces)
}

/// Fills any missing time fields from the wall clock, reading it once at
/// most. The same input string can therefore parse to different times on
/// different days; precisions that mask every clock-filled field are
/// unaffected.
fn fill_missing_from_clock(pieces: &Pieces) -> (i8, i8, i8) {
    if let (Some(hour), Some(minute), Some(second)) = (pieces.hour, pieces.minute, pieces.second) {
        return (hour, minute, second);
    }

    let now = LocalDateTime::now();
    (pieces.hour.unwrap_or_else(|| now.hour()),
     pieces.minute.unwrap_or_else(|| now.minute()),
     pieces.second.unwrap_or_else(|| now.second()))
}

/// Builds the final Gregorian date-time out of a day number and the parsed
/// pieces, applying the precision mask to the time fields.
fn assemble(days: i64, pieces: &Pieces, precision: TimePrecision) -> Result<LocalDateTime, Error> {
    let (hour, minute, second) = match precision {
        TimePrecision::None => (0, 0, 0),
        _ => {
            let (hour, minute, second) = fill_missing_from_clock(pieces);
            match precision {
                TimePrecision::HourOnly      => (hour, 0, 0),
                TimePrecision::HourAndMinute => (hour, minute, 0),
                _                            => (hour, minute, second),
            }
        }
    };

    let (year, month, day) = local::days_to_ymd(days);
    let date = LocalDateTime::new(year, month, day, hour, minute, second)
                             .map_err(Error::InvalidDate)?;
    check_range(date)?;
    Ok(date)
}
