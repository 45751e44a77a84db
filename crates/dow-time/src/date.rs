//! `Date` type, leap-year rule and day-of-year conversion.
//!
//! A [`Date`] stores its year, month and day-of-month together with the
//! ordinal day-of-year, which is derived once at construction. Day deltas
//! between two dates are computed by walking the years between them one at a
//! time and adding the difference of the two ordinal positions.
//!
//! # Day-of-month offsets
//! [`Date::add_days`] and [`Date::sub_days`] move the day-of-month only; month
//! and year are never carried. An offset that leaves the month is rejected.

use std::str::FromStr;

use dow_core::errors::{Error, Result};
use dow_core::{abs_int, ensure, fail, BigInteger, BigNatural, Integer};

use crate::month::{days_in_month, Month};
use crate::resolution::weekday_of;
use crate::weekday::Weekday;

/// Mean length of a Gregorian year in days.
pub const DAYS_PER_YEAR: f64 = 365.2425;

// ── Calendar rules ────────────────────────────────────────────────────────────

/// Whether a given year is a Gregorian leap year.
///
/// Divisible by 4, and either not divisible by 100 or divisible by 400.
pub const fn is_leap_year(year: Integer) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a given year (365 or 366).
pub const fn days_in_year(year: Integer) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Ordinal day-of-year of `day` in `month` (1 = January 1st).
///
/// The caller guarantees `day` is within `[1, days_in_month(month, leap)]`;
/// use [`day_of_year`] for unchecked input.
pub const fn ordinal_day(day: u8, month: Month, leap: bool) -> u16 {
    let mut total = day as u16;
    let mut i = 0;
    while i < month.number() as usize - 1 {
        total += days_in_month(Month::ALL[i], leap) as u16;
        i += 1;
    }
    total
}

/// Checked ordinal day-of-year for raw `day` / `month` numbers.
///
/// The result lies in `[1, 365]`, or `[1, 366]` when `leap` is set.
///
/// # Errors
/// Returns `Error::Date` if the month is outside `1..=12` or the day is
/// outside the month.
pub fn day_of_year(day: u8, month: u8, leap: bool) -> Result<u16> {
    let month = Month::try_from(month)?;
    check_day(day, month, leap)?;
    Ok(ordinal_day(day, month, leap))
}

fn check_day(day: u8, month: Month, leap: bool) -> Result<()> {
    let days_in = days_in_month(month, leap);
    if day == 0 || day > days_in {
        fail!(
            "day {day} out of range [1, {days_in}] for {month}{}",
            if leap { " (leap year)" } else { "" }
        );
    }
    Ok(())
}

// ── Date ──────────────────────────────────────────────────────────────────────

/// A Gregorian calendar date.
///
/// Immutable once constructed. Ordering is chronological.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: Integer,
    month: Month,
    day: u8,
    ordinal: u16,
}

impl Date {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// # Errors
    /// Returns `Error::Date` if the year is before 1, the month is outside
    /// `1..=12`, or the day does not exist in that month.
    pub fn from_ymd(year: Integer, month: u8, day: u8) -> Result<Self> {
        if year < 1 {
            fail!("year {year} is before year 1");
        }
        let month = Month::try_from(month)?;
        let leap = is_leap_year(year);
        check_day(day, month, leap)?;
        Ok(Self::from_parts_unchecked(year, month, day))
    }

    /// Create a date from already-validated parts.
    pub(crate) const fn from_parts_unchecked(year: Integer, month: Month, day: u8) -> Self {
        Date {
            year,
            month,
            day,
            ordinal: ordinal_day(day, month, is_leap_year(year)),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub const fn year(&self) -> Integer {
        self.year
    }

    /// Return the month.
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Return the day of the month.
    pub const fn day_of_month(&self) -> u8 {
        self.day
    }

    /// Return the ordinal day of the year (1–366).
    pub const fn day_of_year(&self) -> u16 {
        self.ordinal
    }

    /// Return `true` if this date lies in a leap year.
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Number of days in this date's month.
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.month, self.is_leap_year())
    }

    /// Number of days in this date's year.
    pub const fn days_in_year(&self) -> u16 {
        days_in_year(self.year)
    }

    /// Return the day of the week.
    pub const fn weekday(&self) -> Weekday {
        weekday_of(self)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Shift the day-of-month by `n`, keeping month and year.
    ///
    /// # Errors
    /// Returns `Error::Date` if the shifted day falls outside the month.
    pub fn offset_day_of_month(self, n: i32) -> Result<Self> {
        let day = i32::from(self.day) + n;
        let days_in = i32::from(self.days_in_month());
        if !(1..=days_in).contains(&day) {
            fail!(
                "day-of-month offset {n} from {self} leaves {} (valid days 1..={days_in})",
                self.month
            );
        }
        Ok(Self::from_parts_unchecked(self.year, self.month, day as u8))
    }

    /// Move `n` days forward within the month.
    ///
    /// # Errors
    /// `Error::Precondition` if `n` exceeds 31, otherwise as
    /// [`Date::offset_day_of_month`].
    pub fn add_days(self, n: u32) -> Result<Self> {
        self.offset_day_of_month(day_offset(n)?)
    }

    /// Move `n` days backward within the month.
    ///
    /// # Errors
    /// `Error::Precondition` if `n` exceeds 31, otherwise as
    /// [`Date::offset_day_of_month`].
    pub fn sub_days(self, n: u32) -> Result<Self> {
        self.offset_day_of_month(-day_offset(n)?)
    }

    /// Signed number of days from `other` to `self` (positive if `self` is
    /// later).
    ///
    /// Walks the half-open range of years between the two dates, one year at
    /// a time, so the cost grows linearly with the year distance.
    pub const fn delta_julian_days(&self, other: &Date) -> BigInteger {
        let ordinal_diff = self.ordinal as BigInteger - other.ordinal as BigInteger;
        if self.year == other.year {
            return ordinal_diff;
        }

        let (mut year, end, sign) = if self.year > other.year {
            (other.year, self.year, 1)
        } else {
            (self.year, other.year, -1)
        };
        let mut tally: BigInteger = 0;
        while year < end {
            tally += days_in_year(year) as BigInteger;
            year += 1;
        }
        sign * tally + ordinal_diff
    }

    /// Unsigned number of days between `self` and `other`.
    pub fn days_apart(&self, other: &Date) -> BigNatural {
        abs_int(self.delta_julian_days(other)) as BigNatural
    }

    /// Signed distance from `other` to `self` in mean Gregorian years.
    pub fn years_between(&self, other: &Date) -> f64 {
        self.delta_julian_days(other) as f64 / DAYS_PER_YEAR
    }
}

fn day_offset(n: u32) -> Result<i32> {
    ensure!(n <= 31, "day offset {n} exceeds any month length");
    Ok(n as i32)
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year,
            self.month.number(),
            self.day
        )
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

/// Parses `YYYY-MM-DD` with any number of year digits.
impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidArgument(format!("'{s}' is not a YYYY-MM-DD date"));
        let (year, rest) = s.trim().split_once('-').ok_or_else(invalid)?;
        let (month, day) = rest.split_once('-').ok_or_else(invalid)?;
        Date::from_ymd(
            year.parse().map_err(|_| invalid())?,
            month.parse().map_err(|_| invalid())?,
            day.parse().map_err(|_| invalid())?,
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
