use anyhow::Context;
use clap::Parser;
use stubby_config::StubbyConfig;

use crate::cli::GlobalFlags;

mod cli;
mod commands;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("stubby error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;

    let config = StubbyConfig::load().context("failed to load stubby configuration")?;

    commands::dispatch(&cli.command, &config, &flags)
}

fn init_tracing(flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("STUBBY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(flags.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
