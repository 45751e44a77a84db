use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing::info;

use dayofweek::input::parse_date;
use dayofweek::time::{resolve, REFERENCE_SUNDAY};

const PROMPT: &str = "Enter Birthday (yyyy-mm-dd)";

/// Resolve `date`, or a line read from `input` when no date was given, and
/// write the report to `out`.
pub fn run<R: BufRead, W: Write>(date: Option<String>, mut input: R, mut out: W) -> Result<()> {
    let raw = match date {
        Some(d) => d,
        None => {
            writeln!(out, "{PROMPT}")?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line).context("reading date from stdin")? == 0 {
                bail!("no date given on stdin");
            }
            line
        }
    };

    let date = parse_date(&raw)?;
    writeln!(out, "Valid date")?;

    let resolution = resolve(&date);
    info!(
        %date,
        days_apart = date.days_apart(&REFERENCE_SUNDAY),
        years_apart = date.years_between(&REFERENCE_SUNDAY).abs(),
        "date resolved"
    );
    writeln!(out, "{resolution}")?;
    Ok(())
}
