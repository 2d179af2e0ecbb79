//! Configuration model loaded from external sources.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::roster::pager::DEFAULT_PAGE_SIZE;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_new_clients_window_days() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Rows per page of the client and follow-up tables.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_page_size")]
    pub users_page_size: usize,
    /// Clients registered within this many days count as new on the dashboard.
    #[serde(default = "default_new_clients_window_days")]
    pub new_clients_window_days: u64,
}

impl ServerConfig {
    /// Layers `{dir}/default.yaml`, the optional `{dir}/{app_env}.yaml` and
    /// `APP_*` environment variables, later sources winning.
    pub fn load(dir: &Path, app_env: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from(dir.join("default")))
            .add_source(File::from(dir.join(app_env)).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize::<ServerConfig>()?;

        if config.page_size == 0 || config.users_page_size == 0 {
            return Err(ConfigError::Message(
                "page sizes must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }
}
