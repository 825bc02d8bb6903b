//! Coinage demo
//!
//! Runs every demonstration procedure and prints the results to stdout.

use std::io::Write;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coinage_core::currency::ConversionRegistry;
use coinage_shared::AppConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Logs go to stderr; stdout carries the demo output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let registry = ConversionRegistry::from_config(&config.conversion)
        .context("Failed to set up exchange rate providers")?;
    info!(chain = ?registry.default_provider_chain(), "Exchange rate providers ready");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    coinage_showcase::run_all(&mut out, &registry)?;
    out.flush()?;

    Ok(())
}
