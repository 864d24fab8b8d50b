//! jira-servicedesk - connectivity check for a Jira Service Desk instance
//!
//! Loads configuration from the environment, verifies the server is
//! reachable and prints the `info` envelope as JSON on stdout.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `JSD_HOST`: Base URL of the Jira instance
//! - `JSD_USERNAME`: Username for basic authentication
//! - `JSD_PASSWORD`: Password or API token
//!
//! # Usage
//!
//! ```bash
//! JSD_HOST=https://jira.example.com JSD_USERNAME=agent JSD_PASSWORD=xxx ./jira-servicedesk
//! ```

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use jira_servicedesk::{Config, JiraServiceDesk};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the JSON result
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("jira_servicedesk=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting jira-servicedesk v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env().context("Failed to load configuration")?;

    tracing::debug!(host = %config.host, "Configuration loaded");

    let client = JiraServiceDesk::new(&config).context("Failed to create Service Desk client")?;

    let response = client
        .test_connection()
        .await
        .context("Jira Service Desk is not reachable")?;

    let output = serde_json::json!({
        "status": response.status(),
        "message": response.message(),
        "body": response.body(),
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("Failed to render response")?
    );

    Ok(())
}
