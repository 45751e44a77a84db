//! `Month` — month-of-year enum and month lengths.

use dow_core::errors::{Error, Result};

/// Month of the year.
///
/// Variants are numbered 1–12 (January = 1, December = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Construct from a number (1 = January … 12 = December).
    ///
    /// Returns `None` if the value is out of range.
    pub const fn from_number(n: u8) -> Option<Self> {
        if n >= 1 && n <= 12 {
            Some(Self::ALL[n as usize - 1])
        } else {
            None
        }
    }

    /// Return the 1-based month number.
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Return the three-letter abbreviation (`"Jan"`, `"Feb"`, …).
    pub fn short_name(&self) -> &'static str {
        &self.long_name()[..3]
    }

    /// Return the full name (`"January"`, `"February"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

impl From<Month> for u8 {
    fn from(m: Month) -> u8 {
        m as u8
    }
}

impl TryFrom<u8> for Month {
    type Error = Error;

    fn try_from(n: u8) -> Result<Self> {
        Month::from_number(n)
            .ok_or_else(|| Error::Date(format!("month {n} out of range [1, 12]")))
    }
}

/// Number of days in `month`, given whether the year is a leap year.
///
/// Thirty days have September, April, June and November; February has 28,
/// or 29 in a leap year; all the rest have 31.
pub const fn days_in_month(month: Month, leap: bool) -> u8 {
    match month {
        Month::February => {
            if leap {
                29
            } else {
                28
            }
        }
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

/// Checked [`days_in_month`] for a raw month number.
///
/// # Errors
/// Returns `Error::Date` if `month` is outside `1..=12`.
pub fn days_in_month_number(month: u8, leap: bool) -> Result<u8> {
    Ok(days_in_month(Month::try_from(month)?, leap))
}
