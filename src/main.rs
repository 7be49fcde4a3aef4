use clap::Parser;
use stream_alerts::{Args, config::Config, http, metrics, signal_handler};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Register metrics
    metrics::register_metrics()?;

    // Parse config
    let args = Args::parse();
    let config = Config::load(&args)?;

    // Handle signals
    signal_handler()?;

    // Start the HTTP server
    http::create_server(config).await
}
