//! roachctl CLI Application
//!
//! Command-line interface for reconciling CockroachDB databases and running
//! parameterized queries.

mod args;
mod cli;
mod renderer;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use roachctl_core::ClientBuilder;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let renderer = TerminalRenderer::new(args.output, !args.no_color);

    match run(args, &renderer).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            renderer.render_failure(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args, renderer: &TerminalRenderer) -> Result<()> {
    let Args {
        config,
        connection,
        command,
        ..
    } = args;

    let client = ClientBuilder::new()
        .with_config_path(config)
        .with_overrides(connection.into())
        .build()
        .context("Failed to resolve connection settings")?;

    info!("roachctl started");

    let cli = Cli::new(client, renderer);
    match command {
        Commands::Db(args) => cli.reconcile_database(args).await,
        Commands::Query(args) => cli.execute_query(args).await,
    }
}
