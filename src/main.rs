use std::env;

use anyhow::{Context, Result};
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hrms_client::{ClientConfig, HrmsClient, LocalStore};

// Token handed to the client as if an earlier sign-in had stored it.
const TOKEN_VAR: &str = "HRMS_API_TOKEN";

#[tokio::main]
async fn main() -> Result<()> {
    // Load variables from .env file if it exists into the environment
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env().context("loading HRMS client configuration")?;

    let store = LocalStore::new();
    if let Ok(token) = env::var(TOKEN_VAR) {
        store.set(config.token_key.clone(), token);
    } else {
        warn!("{TOKEN_VAR} not set, requests go out unauthenticated");
    }

    let client = HrmsClient::with_store(&config, store)?;

    info!("Fetching dashboard stats from {}", client.base_url());
    let stats: serde_json::Value = client
        .dashboard()
        .stats()
        .await?
        .json()
        .await
        .context("decoding dashboard stats")?;

    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
