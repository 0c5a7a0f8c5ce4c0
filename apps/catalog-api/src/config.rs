//! Configuration for the Catalog API

use core_config::{env_or_default, server::ServerConfig, FromEnv};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub postgres: PostgresConfig,
    pub environment: Environment,
    /// Salutation used by the hello endpoint
    pub greeting: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let postgres = PostgresConfig::from_env()?;
        let greeting = env_or_default("GREETING", "Hello");

        Ok(Self {
            server,
            postgres,
            environment,
            greeting,
        })
    }
}
