mod app;
mod cli;
mod logging;

use std::io;
use std::process;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = app::run(cli.date, io::stdin().lock(), io::stdout().lock()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
