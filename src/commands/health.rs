//! Health command implementation

use crate::cli::HealthArgs;
use crate::config::Config;
use crate::error::Result;
use crate::prober::{health_report, ProbeOptions, SERVICES};

/// Run the health command
pub async fn run(args: HealthArgs, mut config: Config) -> Result<()> {
    if let Some(host) = args.host {
        config.health.host = host;
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config.health.timeout_ms = timeout_ms;
    }
    config.validate()?;

    let options = ProbeOptions::from(&config.health);

    let report = health_report(SERVICES, &options).await;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
