use anyhow::Result;
use clap::Parser;
use finbook::cli::Cli;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finbook=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from .env if present
    dotenvy::dotenv().ok();

    info!("finbook starting up");

    Cli::parse().run()
}
