use clap::Parser;

/// Print the day of the week of a Gregorian date.
#[derive(Parser, Debug)]
#[command(
    name = "dayofweek",
    version,
    about = "Print the day of the week of a Gregorian date"
)]
pub struct Cli {
    /// Date as YYYY-MM-DD. Prompted for on stdin when omitted.
    pub date: Option<String>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_date_and_verbosity() {
        let cli = Cli::try_parse_from(["dayofweek", "-vv", "2021-03-07"]).unwrap();
        assert_eq!(cli.date.as_deref(), Some("2021-03-07"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn date_is_optional() {
        let cli = Cli::try_parse_from(["dayofweek"]).unwrap();
        assert!(cli.date.is_none());
        assert_eq!(cli.verbose, 0);
    }
}
