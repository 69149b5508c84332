use std::time::Duration;

use config::{ConfigError, Environment};
use serde::Deserialize;

/// Connection and logging settings, read from `.env` and the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(rename = "db_host")]
    pub host: String,
    #[serde(rename = "db_port")]
    pub port: u16,
    pub db_name: String,
    #[serde(rename = "db_username")]
    pub username: String,
    #[serde(rename = "db_password")]
    pub password: String,
    #[serde(rename = "db_max_connections")]
    pub max_connections: u32,
    #[serde(rename = "db_max_connection_idle_secs")]
    pub max_connection_idle_secs: u64,
    pub log_level: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_environment(Environment::default())
    }

    // Values stay strings until deserialised; numeric fields are parsed there.
    pub fn from_environment(env: Environment) -> Result<Self, ConfigError> {
        let source = Self::defaults()?.add_source(env).build()?;
        Self::from_source(source)
    }

    pub fn from_source(source: config::Config) -> Result<Self, ConfigError> {
        source.try_deserialize()
    }

    pub fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError>
    {
        config::Config::builder()
            .set_default("db_host", "localhost")?
            .set_default("db_port", 5432_i64)?
            .set_default("db_name", "productapp")?
            .set_default("db_username", "postgres")?
            .set_default("db_password", "postgres")?
            .set_default("db_max_connections", 10_i64)?
            .set_default("db_max_connection_idle_secs", 30_i64)?
            .set_default("log_level", "info")
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.max_connection_idle_secs)
    }
}
