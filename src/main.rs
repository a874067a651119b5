// src/main.rs

use anyhow::Result;
use clap::{CommandFactory, Parser};
use rpmlog::Config;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::discover(cli.config.as_deref())?;
    config.debug |= cli.debug;

    // Diagnostics go to stderr so they never mix with rendered output
    let default_level = if config.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Query {
            operation,
            source,
            output,
        } => commands::cmd_query(&config, &operation, &source, output.as_deref()),
        Commands::Parse { source, json } => commands::cmd_parse(&config, &source, json),
        Commands::Scan { file, json } => commands::cmd_scan(&config, &file, json),
        Commands::Operations => commands::cmd_operations(),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "rpmlog", &mut std::io::stdout());
            Ok(())
        }
    }
}
