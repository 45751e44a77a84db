//! Compile-time checks of the calendar rules and the reference anchor.
//!
//! Any violation fails the build.

use crate::date::{ordinal_day, Date};
use crate::month::{days_in_month, Month};
use crate::resolution::{weekday_of, REFERENCE_SUNDAY};
use crate::weekday::Weekday;

const _: () = assert!(days_in_month(Month::January, false) == 31, "January has 31 days");
const _: () = assert!(days_in_month(Month::January, true) == 31, "January has 31 days");
const _: () = assert!(days_in_month(Month::February, false) == 28, "February has 28 days");
const _: () = assert!(days_in_month(Month::February, true) == 29, "February has 29 days in a leap year");

const _: () = assert!(ordinal_day(1, Month::January, false) == 1, "first day is day 1");
const _: () = assert!(ordinal_day(31, Month::December, false) == 365, "last day is day 365");
const _: () = assert!(ordinal_day(31, Month::December, true) == 366, "last leap day is day 366");
const _: () = assert!(ordinal_day(6, Month::May, false) == 126, "May 6th is day 126");
const _: () = assert!(ordinal_day(6, Month::May, true) == 127, "May 6th is day 127 in a leap year");

const fn anchor_offset(k: i64) -> i64 {
    let day = (REFERENCE_SUNDAY.day_of_month() as i64 + k) as u8;
    Date::from_parts_unchecked(REFERENCE_SUNDAY.year(), REFERENCE_SUNDAY.month(), day)
        .delta_julian_days(&REFERENCE_SUNDAY)
}

const fn anchor_offsets_hold() -> bool {
    let mut k = -6;
    while k <= 6 {
        if anchor_offset(k) != k {
            return false;
        }
        k += 1;
    }
    true
}

const _: () = assert!(anchor_offset(0) == 0, "delta of the anchor to itself is 0");
const _: () = assert!(anchor_offsets_hold(), "in-month offsets from the anchor equal their delta");
const _: () = assert!(
    weekday_of(&REFERENCE_SUNDAY) as u8 == Weekday::Sunday as u8,
    "the anchor is a Sunday"
);
