use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Charging/auth server the gateway connects out to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiamServerConfig {
    pub protocol: String,
    pub address: String,
    pub local_address: String,
    pub dest_realm: String,
    pub dest_host: String,
}

/// Local Diameter client identity and behaviour
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiamClientConfig {
    pub protocol: String,
    pub address: String,
    pub retransmits: u32,
    pub watchdog_interval: u32,
    pub retry_count: u32,
    pub local_address: String,
    pub product_name: String,
    pub realm: String,
    pub host: String,
    pub dest_realm: String,
    pub dest_host: String,
}

/// Default bandwidth policy for subscribers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HssConfigSubscriptionProfile {
    pub max_ul_bit_rate: u64,
    pub max_dl_bit_rate: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HssConfig {
    pub server: Option<DiamServerConfig>,
    pub lte_auth_op: Vec<u8>,
    pub lte_auth_amf: Vec<u8>,
    pub default_sub_profile: Option<HssConfigSubscriptionProfile>,
    pub sub_profiles: BTreeMap<String, HssConfigSubscriptionProfile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct S6aConfig {
    pub server: Option<DiamClientConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GxConfig {
    pub server: Option<DiamClientConfig>,
}

/// When the gateway opens a Gy session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GyInitMethod {
    #[default]
    Reserved,
    PerSession,
    PerKey,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GyConfig {
    pub server: Option<DiamClientConfig>,
    pub init_method: GyInitMethod,
}

/// Federation settings of one network, as the controller stores them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FederationConfig {
    pub s6a: Option<S6aConfig>,
    pub gx: Option<GxConfig>,
    pub gy: Option<GyConfig>,
    pub hss: Option<HssConfig>,
    /// Controller bookkeeping, never sent to gateways
    pub description: String,
}
