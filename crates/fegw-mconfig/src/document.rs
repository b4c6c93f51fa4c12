use thiserror::Error;

use crate::controller::FederationConfig;
use crate::mconfig::FederationMconfig;

#[derive(Error, Debug)]
pub enum MconfigError {
    #[error("Invalid controller config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Failed to render mconfig: {0}")]
    Render(#[from] serde_json::Error),
}

impl FederationConfig {
    /// Read a controller federation document. Missing sections stay absent.
    pub fn from_yaml(yaml: &str) -> Result<Self, MconfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

impl FederationMconfig {
    /// Render as the JSON pushed to gateways
    pub fn to_json(&self) -> Result<String, MconfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, MconfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
