//! # dow-time
//!
//! Gregorian date arithmetic and day-of-week resolution.
//!
//! Every weekday is computed as a day offset from a fixed anchor date known to
//! be a Sunday ([`REFERENCE_SUNDAY`], 2021-03-07), reduced modulo 7.
//!
//! ```
//! use dow_time::{Date, Weekday};
//!
//! let d = Date::from_ymd(2000, 1, 1).unwrap();
//! assert_eq!(d.weekday(), Weekday::Saturday);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type, leap-year rule and day-of-year conversion.
pub mod date;

/// `Month` — month of the year and month lengths.
pub mod month;

/// Weekday resolution against the reference anchor.
pub mod resolution;

/// `Weekday` — day of the week.
pub mod weekday;

mod checks;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{day_of_year, days_in_year, is_leap_year, ordinal_day, Date, DAYS_PER_YEAR};
pub use month::{days_in_month, days_in_month_number, Month};
pub use resolution::{residue, resolve, weekday_of, Resolution, REFERENCE_SUNDAY};
pub use weekday::Weekday;
