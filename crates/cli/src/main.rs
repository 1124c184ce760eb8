//! CLI entry point for tgen.

use std::process;

use clap::Parser;
use cli::{telemetry, CliConfig};

fn main() {
    let config = CliConfig::parse();
    telemetry::init(&config.log_level);

    if let Err(err) = config.run() {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}
