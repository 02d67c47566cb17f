mod log;

use accounts_client::AccountsClient;
use anyhow::Context;
use std::time::Duration;
use url::Url;

#[derive(serde::Deserialize, Debug)]
struct Config {
    base_url: Url,
    api_version: Option<String>,
    timeout_secs: Option<u64>,
}

impl Config {
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .set_default("base_url", "http://localhost:8080")?
            // Add in `./config.json`, `./config.toml`, ... if present
            .add_source(config::File::with_name("config").required(false))
            // Add in settings from the environment, e.g. `ACCOUNTS_BASE_URL`
            .add_source(config::Environment::with_prefix("ACCOUNTS"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

async fn run() -> anyhow::Result<()> {
    log::init();
    let config = Config::read()?;

    tracing::info!("App is starting..");

    let mut http_client = reqwest::Client::builder();
    if let Some(timeout_secs) = config.timeout_secs {
        http_client = http_client.timeout(Duration::from_secs(timeout_secs));
    }

    let mut builder = AccountsClient::builder(config.base_url.clone())
        .with_http_client(http_client.build()?);
    if let Some(api_version) = config.api_version {
        builder = builder.with_api_version(api_version);
    }
    let client = builder.build();

    anyhow::ensure!(
        client.health.status().await,
        "Accounts API at {} is down, exiting..",
        config.base_url
    );

    tracing::info!("Accounts API is healthy.");

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}
