//! Weekday resolution against a fixed reference Sunday.
//!
//! The weekday of a date is the residue of its day delta from
//! [`REFERENCE_SUNDAY`] modulo 7, where residue 0 is Sunday. Dates before the
//! anchor produce negative deltas; the residue is always taken with floored
//! (Euclidean) semantics so it stays in `[0, 6]`.

use tracing::debug;

use crate::date::Date;
use crate::month::Month;
use crate::weekday::Weekday;

/// March 7, 2021, a Sunday. Zero point of every weekday computation.
pub const REFERENCE_SUNDAY: Date = Date::from_parts_unchecked(2021, Month::March, 7);

/// Non-negative remainder of a day delta modulo 7.
pub const fn residue(delta: i64) -> u8 {
    delta.rem_euclid(7) as u8
}

/// Day of the week of `date`.
pub const fn weekday_of(date: &Date) -> Weekday {
    Weekday::from_residue(date.delta_julian_days(&REFERENCE_SUNDAY))
}

/// Every intermediate value of a weekday resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    /// The resolved date.
    pub date: Date,
    /// Signed day delta from [`REFERENCE_SUNDAY`].
    pub delta_days: i64,
    /// `delta_days` modulo 7, in `[0, 6]`.
    pub residue: u8,
    /// The weekday the residue maps to.
    pub weekday: Weekday,
}

/// Resolve the weekday of `date`, keeping the delta and residue.
pub fn resolve(date: &Date) -> Resolution {
    let delta_days = date.delta_julian_days(&REFERENCE_SUNDAY);
    let residue = residue(delta_days);
    let weekday = Weekday::from_residue(delta_days);
    debug!(%date, delta_days, residue, %weekday, "resolved weekday");
    Resolution {
        date: *date,
        delta_days,
        residue,
        weekday,
    }
}

/// Prints the `DeltaDays=`, `DeltaDays Mod 7=` and `Result=` report lines.
impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DeltaDays={}", self.delta_days)?;
        writeln!(f, "DeltaDays Mod 7={}", self.residue)?;
        write!(f, "Result={}", self.weekday)
    }
}
