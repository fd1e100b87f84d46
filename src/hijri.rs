//! The Islamic (Lunar Hijri) calendar rule.
//!
//! This is the *tabular* Islamic calendar: twelve purely lunar months that
//! alternate between 30 and 29 days, with eleven leap years in every
//! 30-year cycle (year `y` is a leap year exactly when
//! `(11y + 3) mod 30 >= 19`). A leap year stretches the final month to 30
//! days. Counting from the civil epoch (the 16th of July, 622 in the
//! Julian calendar) this gives the arithmetic calendar used for civil
//! purposes, which is exact and round-trips perfectly.
//!
//! The months of the *observational* calendar begin at the sighting of the
//! new moon, so regional calendars can run a day or two away from the
//! tabular dates. A [`Hijri`](struct.Hijri.html) value carries an
//! adjustment, in days, to compensate; callers who need regional
//! correction construct a calendar with it explicitly.

use local::Error;


/// Day number of 1 Muharram, year 1: the number of days between the civil
/// epoch and the 1st of January, 1970.
const EPOCH_DAYS: i64 = -492_148;

/// Number of days in every 30-year cycle: 19 common years of 354 days,
/// and 11 leap years of 355.
const DAYS_IN_30Y: i64 = 10_631;


/// A tabular lunar Hijri calendar, shifted by a whole number of days.
///
/// A positive adjustment makes a given Gregorian day fall that many days
/// *later* in the Hijri calendar; a negative one, earlier. Regional
/// corrections stay within two days either way, and the adjustment is
/// limited to that range. It is applied symmetrically in both directions
/// of conversion, so round-trips are exact for every permitted value.
///
/// ### Examples
///
/// ```
/// use dateconv::Hijri;
///
/// let calendar = Hijri::civil();
/// assert!(calendar.is_leap_year(2));
/// assert!(!calendar.is_leap_year(1));
/// assert_eq!(calendar.days_in_month(2, 12), 30);
/// ```
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Hijri {
    adjustment: i64,
}

impl Hijri {

    /// The plain civil tabular calendar, with no adjustment.
    pub fn civil() -> Hijri {
        Hijri { adjustment: 0 }
    }

    /// A calendar shifted by the given number of days. Adjustments beyond
    /// two days either way are rejected.
    pub fn new(adjustment: i64) -> Result<Hijri, Error> {
        if adjustment < -2 || adjustment > 2 {
            return Err(Error::OutOfRange);
        }

        Ok(Hijri { adjustment })
    }

    /// The number of days this calendar is shifted by.
    pub fn adjustment(&self) -> i64 {
        self.adjustment
    }

    /// Returns whether the given Hijri year is a leap year of 355 days.
    pub fn is_leap_year(&self, year: i64) -> bool {
        (11 * year + 3).rem_euclid(30) >= 19
    }

    /// Returns the number of days in the given month of the given year.
    pub fn days_in_month(&self, year: i64, month: i8) -> i8 {
        match month {
            1 | 3 | 5 | 7 | 9 | 11 => 30,
            2 | 4 | 6 | 8 | 10     => 29,
            12 => if self.is_leap_year(year) { 30 } else { 29 },
            _  => 0,
        }
    }

    /// Converts a Hijri date to the number of days since the 1st of
    /// January, 1970. The fields are validated first: months run from 1
    /// to 12, days from 1 to the month's length, and years start at 1.
    pub fn to_days(&self, year: i64, month: i8, day: i8) -> Result<i64, Error> {
        // Years far past the supported Gregorian span would overflow the
        // cycle arithmetic, so they are rejected before it runs.
        if year < 1 || year > 10_000 {
            return Err(Error::OutOfRange);
        }

        if month < 1 || month > 12 || day < 1 || day > self.days_in_month(year, month) {
            return Err(Error::OutOfRange);
        }

        let month = month as i64;
        Ok(EPOCH_DAYS
            + days_before_year(year)
            + 29 * (month - 1) + month / 2   // the months alternate 30/29
            + (day as i64 - 1)
            - self.adjustment)
    }

    /// Converts a number of days since the 1st of January, 1970 into a
    /// Hijri (year, month, day) triple.
    pub fn from_days(&self, days: i64) -> (i64, i8, i8) {
        let days = days + self.adjustment - EPOCH_DAYS;

        // Thirty tabular years hold exactly 10,631 days, which makes
        // finding the year a single division; the months are short enough
        // to scan directly.
        let year = (30 * days + 10_646).div_euclid(DAYS_IN_30Y);
        let mut remainder = days - days_before_year(year);

        let mut month = 1;
        while month < 12 && remainder >= self.days_in_month(year, month) as i64 {
            remainder -= self.days_in_month(year, month) as i64;
            month += 1;
        }

        (year, month, remainder as i8 + 1)
    }
}

impl Default for Hijri {
    fn default() -> Hijri {
        Hijri::civil()
    }
}

/// Number of days that have elapsed between the calendar's epoch and the
/// start of the given year.
fn days_before_year(year: i64) -> i64 {
    354 * (year - 1) + (11 * year + 3).div_euclid(30)
}


#[cfg(test)]
mod test {
    use super::*;
    use local::ymd_to_days;

    #[test]
    fn new_year_1400() {
        // 1 Muharram 1400 fell on the 21st of November, 1979.
        let days = ymd_to_days(1979, 11, 21);
        assert_eq!(Hijri::civil().from_days(days), (1400, 1, 1));
        assert_eq!(Hijri::civil().to_days(1400, 1, 1), Ok(days));
    }

    #[test]
    fn new_year_1446() {
        // 1 Muharram 1446 fell on the 8th of July, 2024.
        let days = ymd_to_days(2024, 7, 8);
        assert_eq!(Hijri::civil().from_days(days), (1446, 1, 1));
        assert_eq!(Hijri::civil().to_days(1446, 1, 1), Ok(days));
    }

    #[test]
    fn millennium() {
        // The 1st of January, 2000 was 24 Ramadan 1420.
        let days = ymd_to_days(2000, 1, 1);
        assert_eq!(Hijri::civil().from_days(days), (1420, 9, 24));
        assert_eq!(Hijri::civil().to_days(1420, 9, 24), Ok(days));
    }

    #[test]
    fn leap_years_of_the_thirty_year_cycle() {
        let calendar = Hijri::civil();
        let leaps = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];
        for year in 1..31 {
            assert_eq!(calendar.is_leap_year(year), leaps.contains(&year),
                       "year {} of the cycle", year);
            // The pattern repeats every 30 years.
            assert_eq!(calendar.is_leap_year(year), calendar.is_leap_year(year + 1440));
        }
    }

    #[test]
    fn month_lengths() {
        let calendar = Hijri::civil();
        assert_eq!(calendar.days_in_month(1446, 1), 30);
        assert_eq!(calendar.days_in_month(1446, 2), 29);
        assert_eq!(calendar.days_in_month(1445, 12), 30);  // 1445 is a leap year
        assert_eq!(calendar.days_in_month(1446, 12), 29);
    }

    #[test]
    fn adjustment_shifts_by_whole_days() {
        let back_one = Hijri::new(-1).unwrap();
        let days = ymd_to_days(1979, 11, 22);
        assert_eq!(back_one.from_days(days), (1400, 1, 1));
        assert_eq!(back_one.to_days(1400, 1, 1), Ok(days));

        let forward_one = Hijri::new(1).unwrap();
        let days = ymd_to_days(1979, 11, 20);
        assert_eq!(forward_one.from_days(days), (1400, 1, 1));
        assert_eq!(forward_one.to_days(1400, 1, 1), Ok(days));
    }

    #[test]
    fn adjustments_are_bounded() {
        assert!(Hijri::new(2).is_ok());
        assert!(Hijri::new(-2).is_ok());
        assert!(Hijri::new(3).is_err());
        assert!(Hijri::new(-3).is_err());
        assert!(Hijri::new(i64::min_value()).is_err());
    }

    #[test]
    fn adjusted_dates_at_the_start_of_the_span() {
        // The earliest Gregorian day the conversions accept is well into
        // Hijri year 1, so even the largest backwards adjustment cannot
        // produce a date before the calendar's own first day.
        let days = ymd_to_days(623, 1, 1);
        for adjustment in -2..3 {
            let calendar = Hijri::new(adjustment).unwrap();
            let (year, month, day) = calendar.from_days(days);
            assert_eq!(year, 1);
            assert_eq!(calendar.to_days(year, month, day), Ok(days));
        }
    }

    #[test]
    fn field_validation() {
        let calendar = Hijri::civil();
        assert!(calendar.to_days(1446, 13, 1).is_err());
        assert!(calendar.to_days(1446, 0, 1).is_err());
        assert!(calendar.to_days(1446, 1, 31).is_err());
        assert!(calendar.to_days(1446, 2, 30).is_err());
        assert!(calendar.to_days(1446, 12, 30).is_err());  // not a leap year
        assert!(calendar.to_days(1445, 12, 30).is_ok());
        assert!(calendar.to_days(0, 1, 1).is_err());
    }

    #[test]
    fn absurd_years() {
        let calendar = Hijri::civil();
        assert!(calendar.to_days(10_001, 1, 1).is_err());
        assert!(calendar.to_days(9_000_000_000_000_000_000, 1, 1).is_err());
        assert!(calendar.to_days(i64::max_value(), 12, 29).is_err());
        assert!(calendar.to_days(i64::min_value(), 1, 1).is_err());
    }

    #[test]
    fn every_day_of_a_year_round_trips() {
        for adjustment in -2..3 {
            let calendar = Hijri::new(adjustment).unwrap();
            for &year in &[1420, 1445, 1446] {
                for month in 1..13 {
                    for day in 1 .. calendar.days_in_month(year, month) + 1 {
                        let days = calendar.to_days(year, month, day).unwrap();
                        assert_eq!(calendar.from_days(days), (year, month, day));
                    }
                }
            }
        }
    }
}
