//! Application Configuration
//!
//! Layers built-in defaults, an optional TOML file and `CARDGEN__*`
//! environment variables. Command-line flags are applied on top by the binary.

use crate::domain::network::PaymentNetwork;
use crate::error::{CardError, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Output encoding for generated records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Json,
}

/// Card generation settings
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    pub count: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    /// Forces every card onto one network instead of picking at random.
    #[serde(default)]
    pub network: Option<PaymentNetwork>,
}

/// Output settings
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub generator: GeneratorConfig,
    pub output: OutputConfig,
    pub log_level: String,
}

impl Default for AppConfig {
    /// The built-in layer on its own, for commands that read no settings.
    fn default() -> Self {
        Self {
            generator: GeneratorConfig {
                count: 1,
                seed: None,
                network: None,
            },
            output: OutputConfig {
                format: OutputFormat::Csv,
            },
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `path` (or `cardgen.*` in the working directory
    /// when present) and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let builder = Config::builder()
            .set_default("generator.count", 1)?
            .set_default("output.format", "csv")?
            .set_default("log_level", "warn")?;

        let builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("cardgen").required(false)),
        };

        let config: Self = builder
            // e.g. CARDGEN__GENERATOR__SEED=7
            .add_source(
                Environment::with_prefix("CARDGEN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.generator.count == 0 {
            return Err(CardError::Configuration(
                "generator.count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
