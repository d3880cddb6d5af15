//! Transaction-inspection agent
//!
//! Reads newline-delimited JSON transaction events from stdin, runs the
//! enabled detectors over each one, and writes findings as JSON lines to
//! stdout.

use std::env;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sentinel_agent::Agent;
use sentinel_core::AgentConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("Starting sentinel agent v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = match env::var("SENTINEL_DETECTORS") {
        Ok(names) => AgentConfig {
            enabled_detectors: names
                .split(',')
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .collect(),
        },
        Err(_) => AgentConfig::default(),
    };

    let agent = Agent::new(&config)?;
    info!("Enabled detectors: {}", agent.stats().detector_count);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut processed = 0u64;
    let mut emitted = 0u64;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                processed += 1;
                match agent.handle_json(&line) {
                    Ok(findings) => {
                        for finding in &findings {
                            println!("{}", serde_json::to_string(finding)?);
                        }
                        emitted += findings.len() as u64;
                    }
                    Err(e) => warn!("Skipping event: {e}"),
                }
            }
            _ = signal::ctrl_c() => {
                info!("Received Ctrl+C");
                break;
            }
        }
    }

    info!("Processed {processed} transactions, emitted {emitted} findings");
    Ok(())
}
