mod cli;
mod commands;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Commands};
use commands::{counties, dashboard, export, predict};

/// `RUST_LOG` wins; otherwise each `-v` raises the level one step from warn.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = countyprice::Config::resolve(cli.config.as_deref())?;
    match &cli.command {
        Commands::Counties => counties::run(&config),
        Commands::Predict(args) => predict::run(&config, args),
        Commands::Dashboard(args) => dashboard::run(&config, args),
        Commands::Export(args) => export::run(&config, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
