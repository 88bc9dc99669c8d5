//! Campus Portal - terminal front end for the Campus LMS

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use campus_portal::{config::Args, screens};
use campus_sdk::{ApiClient, SessionStore};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing/logging
    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("campus_portal={},campus_sdk={},info", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Validate configuration
    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    // Print startup banner
    info!("======================================");
    info!("  Campus Portal");
    info!("======================================");
    info!("API: {}", args.api_url);
    info!("Request timeout: {}s", args.timeout_secs);
    info!("Certificate dir: {}", args.output_dir.display());
    info!("======================================");

    let client = ApiClient::new(args.client_config(), SessionStore::new());
    screens::run(&client, &args).await
}
