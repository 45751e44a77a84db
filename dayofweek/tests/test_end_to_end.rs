//! End-to-end: input string → validated date → delta → weekday.

use dayofweek::core::Error;
use dayofweek::input::{parse_date, InputError};
use dayofweek::time::{resolve, Weekday};

#[test]
fn new_year_2000_is_a_saturday() {
    let date = parse_date("2000-01-01").unwrap();
    let r = resolve(&date);
    assert_eq!(r.delta_days, -7736);
    assert_eq!(r.residue, 6);
    assert_eq!(r.weekday, Weekday::Saturday);
}

#[test]
fn leap_day_2024() {
    let date = parse_date("2024-02-29").unwrap();
    assert_eq!(date.day_of_year(), 60);
    let r = resolve(&date);
    assert_eq!(r.weekday, Weekday::Thursday);
    assert_eq!(resolve(&parse_date("2024-02-29").unwrap()), r);
}

#[test]
fn anchor_and_neighbours() {
    assert_eq!(resolve(&parse_date("2021-03-07").unwrap()).weekday, Weekday::Sunday);
    assert_eq!(resolve(&parse_date("2021-03-08").unwrap()).weekday, Weekday::Monday);
    let before = resolve(&parse_date("2021-03-01").unwrap());
    assert_eq!(before.delta_days, -6);
    assert_eq!(before.residue, 1);
    assert_eq!(before.weekday, Weekday::Monday);
}

#[test]
fn month_out_of_range_never_reaches_the_engine() {
    assert_eq!(
        parse_date("2021-13-01"),
        Err(InputError::Malformed("2021-13-01".into()))
    );
}

#[test]
fn syntactically_valid_but_nonexistent_day() {
    match parse_date("2021-02-30") {
        Err(InputError::Invalid(Error::Date(msg))) => assert!(msg.contains("February")),
        other => panic!("expected a date error, got {other:?}"),
    }
}
