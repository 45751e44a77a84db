//! # dayofweek
//!
//! Day-of-week lookup for Gregorian dates.
//!
//! This crate is a **façade** over the workspace crates plus the input layer
//! that turns a `YYYY-MM-DD` string into a validated [`time::Date`].
//!
//! ## Quick start
//!
//! ```rust
//! use dayofweek::input::parse_date;
//! use dayofweek::time::{resolve, Weekday};
//!
//! let date = parse_date("2000-01-01").unwrap();
//! let resolution = resolve(&date);
//! assert_eq!(resolution.weekday, Weekday::Saturday);
//! assert_eq!(resolution.residue, 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core aliases and error definitions.
pub use dow_core as core;

/// Date, month and weekday types, and weekday resolution.
pub use dow_time as time;

/// `YYYY-MM-DD` input validation.
pub mod input;
