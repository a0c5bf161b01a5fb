//! Terminal front end for the odd-jobs intake.
//!
//! Seeds an in-process store from a roster file, then either walks a
//! customer through the intake or lists workers for quick booking.

mod app;
mod intake;
mod listing;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use marketplace_core::common::CustomerId;
use marketplace_core::Config;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;

#[derive(Parser)]
#[command(name = "oddjobs")]
#[command(about = "Describe a problem, answer a few questions, book a worker")]
struct Cli {
    /// JSON file of worker documents (overrides ROSTER_PATH)
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Customer to book on behalf of (overrides CUSTOMER_ID)
    #[arg(long)]
    customer: Option<CustomerId>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Guided intake ending in a booking (default)
    Intake,

    /// Browse workers, quick book or toggle availability
    Workers,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(path) = cli.roster {
        config = config.with_roster_path(path);
    }
    if let Some(customer_id) = cli.customer {
        config = config.with_customer_id(customer_id);
    }

    // Logs go to stderr so they don't tangle with the prompts
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(customer_id = %config.customer_id, "Starting odd jobs intake");

    let app = App::start(&config)?;
    app.print_banner()?;

    let outcome = match cli.command.unwrap_or(Commands::Intake) {
        Commands::Intake => intake::run(&app).await,
        Commands::Workers => listing::run(&app).await,
    };

    app.shutdown().await?;
    outcome
}
