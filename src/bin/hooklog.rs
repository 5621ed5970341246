//! `hooklog <severity> <message>...` — see `hooklog --help`.

use clap::Parser;
use hooklog::cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    Cli::parse().run()
}
