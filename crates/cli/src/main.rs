// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! seqlog - ship log events to sequenced log streams

#![cfg_attr(test, allow(clippy::unwrap_used))]

mod commands;
mod completions;
mod error;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{put, ship, TargetArgs};
use std::process::ExitCode;

use crate::error::CliError;

#[derive(Parser)]
#[command(
    name = "seqlog",
    version,
    about = "seqlog - Ship log events to sequenced log streams"
)]
struct Cli {
    #[command(flatten)]
    target: TargetArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a single event
    Put(put::PutArgs),
    /// Write one event per line of stdin
    Ship(ship::ShipArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<CliError>() {
                Some(cli_error) => eprint!("{}", cli_error),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Put(args) => put::put(args, &cli.target).await,
        Commands::Ship(args) => ship::ship(args, &cli.target).await,
        Commands::Completions(args) => {
            completions::generate_completions::<Cli>(args.shell);
            Ok(())
        }
    }
}

/// Diagnostics go to stderr; RUST_LOG overrides the default level
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
