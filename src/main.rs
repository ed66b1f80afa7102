//! Somneo exporter - main entry point
//!
//! Runs the collector loop until an interrupt signal arrives, then releases
//! the database connection and exits cleanly.

use clap::Parser;
use somneo_exporter::{
    config::{self, ExporterConfig},
    logging, Collector, InfluxWriter, SomneoClient,
};
use std::time::Duration;
use tracing::{error, info};

/// Somneo sensor exporter for InfluxDB
#[derive(Parser, Debug)]
#[command(name = "somneo-exporter", version, about, long_about = None)]
struct Cli {
    /// Device host (overrides SOMNEO_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Device port (overrides SOMNEO_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Location tag (overrides SOMNEO_LOCATION)
    #[arg(long)]
    location: Option<String>,

    /// Poll interval in seconds (overrides POLL_INTERVAL)
    #[arg(long)]
    interval: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let log_config = logging::LogConfig::from_env();
    if let Err(e) = logging::init_logging(log_config) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    let mut config = match ExporterConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Apply CLI overrides (CLI > ENV > default)
    if cli.host.is_some() || cli.port.is_some() {
        let host = cli
            .host
            .or_else(|| config.somneo.url.host_str().map(str::to_owned))
            .unwrap_or_else(|| config::DEFAULT_SOMNEO_HOST.to_string());
        let port = cli
            .port
            .or_else(|| config.somneo.url.port_or_known_default())
            .unwrap_or(config::DEFAULT_SOMNEO_PORT);
        config.somneo.url = match config::device_url(&host, port) {
            Ok(url) => url,
            Err(e) => {
                error!("Invalid device address: {e}");
                std::process::exit(1);
            }
        };
    }
    if let Some(location) = cli.location {
        config.location = location;
    }
    if let Some(interval) = cli.interval {
        config.poll_interval = Duration::from_secs(interval);
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    info!("Starting Somneo exporter for {}", config.somneo.url);
    info!(
        "Writing to InfluxDB at {}, database: {}",
        config.influxdb.url, config.influxdb.database
    );
    info!("Poll interval: {} seconds", config.poll_interval.as_secs());

    let client = match SomneoClient::new(&config.somneo) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create device client: {e}");
            std::process::exit(1);
        }
    };

    let writer = InfluxWriter::connect(&config.influxdb).await;

    let collector = Collector::new(client, writer, &config);
    collector.run(shutdown_signal()).await;

    info!("Shutdown complete");
}

/// Resolve on SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            info!("Received terminate signal");
        }
    }
}
