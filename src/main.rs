// MedRemind - offline medication reminder and dose tracker
// Entry point and application setup

use clap::Parser;
use medremind::app::{self, AppState};
use medremind::cli::Cli;
use medremind::commands;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medremind=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => app::default_data_dir()?,
    };

    let state = AppState::initialize(data_dir).await?;

    commands::dispatch(&state, cli.command).await?;

    Ok(())
}
