//! # CCM Verify
//!
//! Checks that a CCM client can reach its server and prints the client
//! version, server version and active profile as JSON.

use std::time::Duration;

use anyhow::Context;
use ccm_sdk::{CcmClient, ClientConfig};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ccm-verify", version, about = "Verify connectivity to a CCM server")]
struct Cli {
    /// User id assigned when access to CCM was granted
    #[arg(long, default_value = "test")]
    user_id: String,

    /// API base URL; falls back to API_HOST from the environment or .env
    #[arg(long)]
    api_host: Option<String>,

    /// Give up on the server after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Also list the client's preference profiles
    #[arg(long)]
    profiles: bool,
}

impl Cli {
    fn config(&self) -> anyhow::Result<ClientConfig> {
        let mut builder = ClientConfig::builder(&self.user_id);

        match &self.api_host {
            Some(host) => builder = builder.api_host(host),
            None => {
                if let Some(host) = ClientConfig::from_env(&self.user_id)?.api_host {
                    builder = builder.api_host(host.as_str());
                }
            }
        }

        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(builder.build()?)
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = CcmClient::new(cli.config()?)?;

    match client.get_api_host() {
        Some(host) => info!("Verifying against {}", host),
        None => info!("No API host configured"),
    }

    let report = client
        .verify()
        .await
        .context("CCM server verification failed")?;

    let mut output = serde_json::to_value(&report)?;
    if cli.profiles {
        output["profiles"] = serde_json::to_value(client.get_all_profiles())?;
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse()).await
}
