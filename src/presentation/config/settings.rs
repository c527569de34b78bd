use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::application::services::{BatchOptions, DEFAULT_FETCH_SIZE, DEFAULT_FLUSH_SIZE};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub batch: BatchSettings,
    pub normalizer: NormalizerSettings,
    #[serde(default)]
    pub notification: NotificationSettings,
    /// Release shown in the start-up banner.
    pub version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub name: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchSettings {
    pub flush_size: usize,
    pub fetch_size: usize,
    /// `0` processes every eligible record.
    pub limit: usize,
}

impl BatchSettings {
    pub fn options(&self) -> BatchOptions {
        BatchOptions::new(self.flush_size, self.fetch_size, self.limit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationStrategy {
    Sentence,
    Morphological,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NormalizerSettings {
    pub strategy: NormalizationStrategy,
    pub service_url: String,
    /// Tab-separated word-form dictionary used instead of the service.
    pub dictionary_path: Option<String>,
    pub min_lemma_len: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationSettings {
    pub webhook_url: Option<String>,
}

impl Settings {
    /// Defaults, then `appsettings.<env>` if present, then `APP_*` variables
    /// with `__` between nested keys (`APP_BATCH__FLUSH_SIZE`). `APP_VERSION`
    /// is read as a plain string.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database.url", "postgres://localhost:5432")?
            .set_default("database.name", "kspd")?
            .set_default("database.max_connections", 2)?
            .set_default("batch.flush_size", DEFAULT_FLUSH_SIZE as u64)?
            .set_default("batch.fetch_size", DEFAULT_FETCH_SIZE as u64)?
            .set_default("batch.limit", 0)?
            .set_default("normalizer.strategy", "morphological")?
            .set_default("normalizer.service_url", "http://localhost:5001")?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // Kept verbatim: numeric parsing would turn `1.0` into `1`.
            .set_override_option("version", std::env::var("APP_VERSION").ok())?
            .build()?
            .try_deserialize()
    }
}
