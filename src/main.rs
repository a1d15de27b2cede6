mod classify_cmd;
mod cli;
mod config;
mod convert;
mod decode_cmd;
mod logging;
mod new_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::AlmanacConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AlmanacConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Classify(args) => classify_cmd::run(args, &config),
        Command::New(args) => new_cmd::run(args, &config),
        Command::Decode(args) => decode_cmd::run(args),
    }
}
