//! `Weekday` — day-of-week enum.

use std::str::FromStr;

use dow_core::errors::Error;

/// Day of the week.
///
/// Variants are numbered 0–6 starting at Sunday, which is the residue a day
/// delta from the reference Sunday reduces to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    /// Sunday (0).
    Sunday = 0,
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
}

impl Weekday {
    /// All seven days in cyclic order, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Construct from an index (0 = Sunday … 6 = Saturday).
    ///
    /// Returns `None` if the value is out of range.
    pub const fn from_index(n: u8) -> Option<Self> {
        if n < 7 {
            Some(Self::ALL[n as usize])
        } else {
            None
        }
    }

    /// Map any day offset from a Sunday onto a weekday.
    ///
    /// Negative offsets are normalized into `[0, 6]` first, so `-1` is
    /// Saturday.
    pub const fn from_residue(delta: i64) -> Self {
        Self::ALL[delta.rem_euclid(7) as usize]
    }

    /// Return the index (0 = Sunday … 6 = Saturday).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The following day, wrapping Saturday to Sunday.
    pub const fn next(self) -> Self {
        Self::from_residue(self as i64 + 1)
    }

    /// The preceding day, wrapping Sunday to Saturday.
    pub const fn previous(self) -> Self {
        Self::from_residue(self as i64 - 1)
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// English name of the day.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive English day name.
impl FromStr for Weekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Weekday::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown weekday '{s}'")))
    }
}

impl From<Weekday> for u8 {
    fn from(d: Weekday) -> u8 {
        d as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for n in 0..7u8 {
            let d = Weekday::from_index(n).unwrap();
            assert_eq!(d.index(), n);
        }
        assert!(Weekday::from_index(7).is_none());
    }

    #[test]
    fn residue_is_normalized() {
        assert_eq!(Weekday::from_residue(0), Weekday::Sunday);
        assert_eq!(Weekday::from_residue(8), Weekday::Monday);
        assert_eq!(Weekday::from_residue(-1), Weekday::Saturday);
        assert_eq!(Weekday::from_residue(-6), Weekday::Monday);
        assert_eq!(Weekday::from_residue(-7), Weekday::Sunday);
        assert_eq!(Weekday::from_residue(i64::MIN), Weekday::from_residue(i64::MIN % 7 + 7));
    }

    #[test]
    fn cyclic_neighbours() {
        assert_eq!(Weekday::Saturday.next(), Weekday::Sunday);
        assert_eq!(Weekday::Sunday.previous(), Weekday::Saturday);
        assert_eq!(Weekday::Wednesday.next().previous(), Weekday::Wednesday);
    }

    #[test]
    fn weekend() {
        assert!(Weekday::Sunday.is_weekend());
        assert!(Weekday::Saturday.is_weekend());
        assert!(!Weekday::Friday.is_weekend());
    }

    #[test]
    fn names_parse_back() {
        for d in Weekday::ALL {
            assert_eq!(d.to_string().parse::<Weekday>().unwrap(), d);
        }
        assert_eq!("tuesday".parse::<Weekday>().unwrap(), Weekday::Tuesday);
        assert!("Funday".parse::<Weekday>().is_err());
    }
}
