//! Pindo CLI Binary
//!
//! Command-line interface for the virtual file tree.

use anyhow::Context;
use clap::Parser;
use pindo::logging::init_logging;
use pindo::tooling::cli::{Cli, CliContext};
use std::process;

fn run(cli: Cli) -> anyhow::Result<bool> {
    let mut config =
        CliContext::load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply_logging_overrides(&mut config);
    init_logging(Some(&config.logging)).context("Failed to initialize logging")?;

    let mut context = CliContext::from_config(config, cli.store.clone())
        .context("Failed to open snapshot store")?;
    let output = context.execute(&cli.command)?;
    println!("{}", output.text);
    Ok(output.success)
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
