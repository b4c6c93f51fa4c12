//! Gateway-facing schema. Every field has exactly one controller source.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use crate::controller::GyInitMethod;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiamServerConfig {
    pub protocol: String,
    pub address: String,
    pub local_address: String,
    pub dest_realm: String,
    pub dest_host: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
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

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HssConfigSubscriptionProfile {
    pub max_ul_bit_rate: u64,
    pub max_dl_bit_rate: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HssConfig {
    pub server: DiamServerConfig,
    pub lte_auth_op: Vec<u8>,
    pub lte_auth_amf: Vec<u8>,
    pub default_sub_profile: HssConfigSubscriptionProfile,
    pub sub_profiles: BTreeMap<String, HssConfigSubscriptionProfile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct S6aConfig {
    pub server: DiamClientConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GxConfig {
    pub server: DiamClientConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GyConfig {
    pub server: DiamClientConfig,
    pub init_method: GyInitMethod,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FederationMconfig {
    pub s6a: S6aConfig,
    pub gx: GxConfig,
    pub gy: GyConfig,
    pub hss: HssConfig,
}
