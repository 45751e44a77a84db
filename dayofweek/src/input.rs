//! `YYYY-MM-DD` input validation.
//!
//! The pattern only admits a 4-digit year starting with 1 or 2, a month
//! `01`–`12` and a day `01`–`31`. It is purely syntactic: `2021-02-30` passes
//! the pattern and is then rejected by date construction.

use dow_core::errors::Error;
use dow_time::Date;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([12]\d{3})-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").expect("valid date regex")
});

/// Why an input string was not turned into a [`Date`].
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The string does not match `YYYY-MM-DD`.
    #[error("'{0}' is not a date of the form YYYY-MM-DD")]
    Malformed(String),

    /// The string matched but names a day that does not exist.
    #[error(transparent)]
    Invalid(#[from] Error),
}

/// Parse and validate a `YYYY-MM-DD` string.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
/// [`InputError::Malformed`] if the pattern does not match,
/// [`InputError::Invalid`] if the day does not exist in that month.
pub fn parse_date(s: &str) -> Result<Date, InputError> {
    let s = s.trim();
    let Some(caps) = DATE_RE.captures(s) else {
        debug!(input = s, "rejected malformed date");
        return Err(InputError::Malformed(s.to_owned()));
    };
    // The pattern guarantees every group is present and all-digit.
    let field = |i: usize| {
        caps[i]
            .parse::<u16>()
            .map_err(|e| Error::InvalidArgument(e.to_string()))
    };
    let year = i32::from(field(1)?);
    let month = field(2)? as u8;
    let day = field(3)? as u8;
    trace!(year, month, day, "date pattern matched");

    Ok(Date::from_ymd(year, month, day)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_dates() {
        let d = parse_date("2021-03-07").unwrap();
        assert_eq!((d.year(), d.month().number(), d.day_of_month()), (2021, 3, 7));
        assert_eq!(parse_date("  1999-12-31\n").unwrap().to_string(), "1999-12-31");
    }

    #[test]
    fn rejects_pattern_mismatch() {
        for s in [
            "2021-13-01",
            "2021-00-10",
            "2021-01-32",
            "2021-01-00",
            "3021-01-01",
            "0999-01-01",
            "21-03-07",
            "2021/03/07",
            "2021-3-7",
            "2021-03-07x",
            "",
        ] {
            assert_eq!(
                parse_date(s),
                Err(InputError::Malformed(s.trim().to_owned())),
                "{s:?} should be malformed"
            );
        }
    }

    #[test]
    fn rejects_nonexistent_days() {
        assert!(matches!(parse_date("2021-02-30"), Err(InputError::Invalid(Error::Date(_)))));
        assert!(matches!(parse_date("2100-02-29"), Err(InputError::Invalid(_))));
        assert!(matches!(parse_date("2021-04-31"), Err(InputError::Invalid(_))));
        assert!(parse_date("2000-02-29").is_ok());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            parse_date("2021-13-01").unwrap_err().to_string(),
            "'2021-13-01' is not a date of the form YYYY-MM-DD"
        );
        assert!(parse_date("2021-02-30")
            .unwrap_err()
            .to_string()
            .starts_with("date error: day 30 out of range"));
    }
}
