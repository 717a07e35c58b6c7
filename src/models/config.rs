//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub upstream: UpstreamConfig,
}

#[derive(Clone, Debug, Deserialize)]
/// Connection settings for the upstream market search API.
pub struct UpstreamConfig {
    /// Search endpoint, without a query string.
    pub base_url: String,
    /// Value sent verbatim in the `Authorization` header.
    #[serde(default)]
    pub api_key: String,
}

impl ServerConfig {
    /// Loads `config/default`, the optional `config/{app_env}` overlay and
    /// `APP_*` environment variables (nested keys separated by `__`).
    pub fn load(app_env: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
