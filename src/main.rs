//! mediator-setup - database bootstrap for the mediator datastore

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mediator_setup::{bootstrap, config::Args};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing/logging
    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("mediator_setup={},info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Validate configuration
    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    info!("======================================");
    info!("  mediator-setup - datastore bootstrap");
    info!("======================================");
    info!("MongoDB: {}", args.mongodb_uri);
    info!("Database: {}", args.mongodb_db);
    info!(
        "Collections: {}, {}, {}",
        args.account_collection, args.message_collection, args.outbound_collection
    );
    info!("Message TTL: {}s", args.message_ttl_seconds);
    info!("======================================");

    // Any failing step is fatal; the deployment operator re-runs after
    // fixing the cause
    if let Err(e) = bootstrap::run(&args).await {
        error!("Bootstrap failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
