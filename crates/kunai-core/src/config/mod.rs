use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{DEFAULT_PRODID, DEFAULT_UID_DOMAIN};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address as a string in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Settings for fetching the calendar being proxied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Whole-request timeout in seconds.
    pub timeout: u64,
}

impl UpstreamConfig {
    #[must_use]
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout)
    }
}

/// Identifiers written into repaired calendars.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// PRODID used when the upstream calendar has none.
    pub prodid: String,
    /// Suffix for generated UIDs (`<hex>@<domain>`).
    pub domain: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`
    /// into a `Settings`. Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(with_defaults(Config::builder())?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Environment
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Applies the built-in default for every setting.
///
/// ## Errors
/// Returns an error if a default cannot be set on the builder.
pub fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>> {
    Ok(builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("upstream.timeout", 30)?
        .set_default("calendar.prodid", DEFAULT_PRODID)?
        .set_default("calendar.domain", DEFAULT_UID_DOMAIN)?
        .set_default("logging.level", "info")?)
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
