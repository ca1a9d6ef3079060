//! Configuration management for the ParkWise client

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::models::enums::Location;

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub storage_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DefaultsConfig {
    pub location: Location,
    pub floor: i32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Optional demo credentials used by the binary to log in on startup
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CredentialsConfig {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix PARKWISE_)
            .add_source(
                Environment::with_prefix("PARKWISE")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override API base URL from PARKING_API_URL env var if present
            .set_override_option("api.base_url", env::var("PARKING_API_URL").ok())?
            // Override session file from PARKING_SESSION_FILE env var if present
            .set_override_option(
                "session.storage_path",
                env::var("PARKING_SESSION_FILE").ok(),
            )?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_path: ".parkwise-session.json".to_string(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            location: Location::CityMall,
            floor: 1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
