use fegw_gy::{ServiceDefaults, SERVICE_CONTEXT_ID_DEFAULT, SERVICE_ID_DEFAULT};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    LoadError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Gateway application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    #[validate(length(min = 1))]
    pub service_name: String,
    #[validate(length(min = 1))]
    pub log_level: String,
    #[serde(default)]
    #[validate(nested)]
    pub charging: ChargingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: "session_proxy".to_string(),
            log_level: "info".to_string(),
            charging: ChargingConfig::default(),
        }
    }
}

/// Operator overrides for the identifiers stamped on every CCR
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ChargingConfig {
    #[validate(length(min = 1))]
    pub service_context_id: String,
    pub service_identifier: u32,
}

impl Default for ChargingConfig {
    fn default() -> Self {
        Self {
            service_context_id: SERVICE_CONTEXT_ID_DEFAULT.to_string(),
            service_identifier: SERVICE_ID_DEFAULT,
        }
    }
}

impl ChargingConfig {
    pub fn service_defaults(&self) -> ServiceDefaults {
        ServiceDefaults {
            service_context_id: self.service_context_id.clone(),
            service_identifier: self.service_identifier,
        }
    }
}

/// Load configuration from file
pub fn load_config<T>(path: &str) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de> + Validate,
{
    let config: T = config::Config::builder()
        .add_source(config::File::with_name(path))
        .add_source(
            config::Environment::with_prefix("FEGW")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .map_err(|e| ConfigError::LoadError(e.to_string()))?
        .try_deserialize()
        .map_err(|e| ConfigError::LoadError(e.to_string()))?;

    config
        .validate()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
    Ok(config)
}

/// Load configuration from YAML string (for testing)
pub fn load_from_yaml<T>(yaml: &str) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de> + Validate,
{
    let config: T =
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::LoadError(e.to_string()))?;
    config
        .validate()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
    Ok(config)
}
