//! Database settings and the default spreadsheet location.
//!
//! Defaults reproduce the fixed deployment this importer was written for; a
//! TOML file can override any subset of the database fields.

use anyhow::{Context, Result};
use log::debug;
use mysql::{Opts, OptsBuilder};
use serde::Deserialize;
use std::path::Path;

/// Spreadsheet path used when `--input` is not given
pub const DEFAULT_EXCEL_FILE: &str = "/var/www/realestate/units_data.xlsx";

/// MySQL connection settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub charset: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            user: "laravel".to_string(),
            password: "laravel123".to_string(),
            database: "real_state".to_string(),
            charset: "utf8mb4".to_string(),
        }
    }
}

impl DbConfig {
    /// Load settings, overlaying a TOML file over the defaults when given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!("loaded database config from {}", path.display());
        Ok(config)
    }

    /// Connection options; the charset is applied via an init statement
    pub fn opts(&self) -> Opts {
        OptsBuilder::new()
            .ip_or_hostname(Some(self.host.as_str()))
            .tcp_port(self.port)
            .user(Some(self.user.as_str()))
            .pass(Some(self.password.as_str()))
            .db_name(Some(self.database.as_str()))
            .init(vec![format!("SET NAMES {}", self.charset)])
            .into()
    }
}
