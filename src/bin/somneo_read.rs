//! One-shot Somneo sensor readout
//!
//! Fetches the sensor block once and prints the four primary readings as
//! formatted JSON on stdout. Useful for checking device reachability
//! without touching the database.

use clap::Parser;
use serde_json::json;
use somneo_exporter::{
    config::{device_url, SomneoConfig},
    Result, SensorReading, SomneoClient,
};
use std::time::Duration;

/// Read the Somneo environmental sensors once
#[derive(Parser, Debug)]
#[command(name = "somneo-read", version, about, long_about = None)]
struct Cli {
    /// Device host
    #[arg(default_value = "192.168.1.180")]
    host: String,

    /// Device port
    #[arg(default_value_t = 443)]
    port: u16,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SomneoConfig {
        url: device_url(&cli.host, cli.port)?,
        timeout: Duration::from_secs(30),
        verify_ssl: false,
    };

    let client = SomneoClient::new(&config)?;
    let raw = client.fetch_sensor_data().await?;
    let reading = SensorReading::from_raw(&raw);

    // Rolling averages stay available on the wire as avtmp/avhum/avlux/avsnd
    let readings = json!({
        "temperature": reading.temperature,
        "humidity": reading.humidity,
        "light": reading.light,
        "noise": reading.noise,
    });
    println!("{}", serde_json::to_string_pretty(&readings)?);

    Ok(())
}
