//! Error types for dayofweek.
//!
//! A single `thiserror`-derived enum covers every failure the workspace can
//! report. All of them are validation failures raised at a boundary (date
//! construction, day-of-month offsets); once a value exists, downstream
//! operations are total.

use thiserror::Error;

/// The top-level error type used throughout dayofweek.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related validation error.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout dayofweek.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with `Error::Precondition` when a condition does not hold.
///
/// # Example
/// ```
/// use dow_core::{ensure, errors::Error};
/// fn positive(x: i64) -> dow_core::errors::Result<i64> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert_eq!(
///     positive(-1),
///     Err(Error::Precondition("x must be positive, got -1".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Error::Date` immediately.
///
/// # Example
/// ```
/// use dow_core::{fail, errors::Error};
/// fn always_err() -> dow_core::errors::Result<()> {
///     fail!("month {} out of range", 13);
/// }
/// assert_eq!(always_err(), Err(Error::Date("month 13 out of range".into())));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Date(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_month(m: u8) -> Result<u8> {
        if !(1..=12).contains(&m) {
            fail!("month {m} out of range [1, 12]");
        }
        Ok(m)
    }

    #[test]
    fn fail_produces_date_error() {
        assert_eq!(checked_month(6), Ok(6));
        let err = checked_month(13).unwrap_err();
        assert_eq!(err, Error::Date("month 13 out of range [1, 12]".into()));
        assert_eq!(err.to_string(), "date error: month 13 out of range [1, 12]");
    }

    #[test]
    fn ensure_produces_precondition_error() {
        fn non_zero(n: i32) -> Result<i32> {
            ensure!(n != 0, "n must be non-zero");
            Ok(n)
        }
        assert_eq!(non_zero(3), Ok(3));
        assert!(matches!(non_zero(0), Err(Error::Precondition(_))));
    }
}
