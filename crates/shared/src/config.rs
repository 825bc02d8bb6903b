//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::MonetaryResult;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Exchange rate configuration.
    #[serde(default)]
    pub conversion: ConversionConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Exchange rate configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionConfig {
    /// Provider names consulted in order by the default provider.
    #[serde(default = "default_provider_chain")]
    pub provider_chain: Vec<String>,
    /// JSON file replacing the bundled reference rates.
    #[serde(default)]
    pub rates_file: Option<PathBuf>,
    /// Maximum number of rates kept by the default provider's cache.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
}

fn default_provider_chain() -> Vec<String> {
    ["IDENT", "ECB", "IMF", "ECB-HIST"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_cache_capacity() -> u64 {
    256
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            provider_chain: default_provider_chain(),
            rates_file: None,
            cache_capacity: default_cache_capacity(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "coinage=info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from optional config files and the environment.
    ///
    /// Every field has a default, so no file is required.
    ///
    /// # Errors
    ///
    /// Returns an error if a source exists but cannot be read or deserialized.
    pub fn load() -> MonetaryResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("COINAGE")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("conversion.provider_chain")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        tracing::debug!(
            run_mode = %run_mode,
            chain = ?loaded.conversion.provider_chain,
            "Configuration loaded"
        );
        Ok(loaded)
    }
}
