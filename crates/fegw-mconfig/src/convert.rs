use tracing::{debug, trace};

use crate::{controller, mconfig};

/// Copy a controller record into its gateway-facing counterpart.
///
/// Implementations copy field for field with no validation, unit changes or
/// default substitution. Nested records that are absent on the controller
/// side project to zero-valued records.
pub trait ToMconfig {
    type Mconfig: Default;

    fn to_mconfig(&self) -> Self::Mconfig;
}

/// Project a possibly absent source. `None` yields the zero-valued record.
pub fn project<T: ToMconfig>(source: Option<&T>) -> T::Mconfig {
    match source {
        Some(config) => config.to_mconfig(),
        None => {
            trace!(
                target_type = std::any::type_name::<T::Mconfig>(),
                "Absent source, projecting zero value"
            );
            T::Mconfig::default()
        }
    }
}

pub fn project_diam_server_config(
    source: Option<&controller::DiamServerConfig>,
) -> mconfig::DiamServerConfig {
    project(source)
}

pub fn project_diam_client_config(
    source: Option<&controller::DiamClientConfig>,
) -> mconfig::DiamClientConfig {
    project(source)
}

pub fn project_subscription_profile(
    source: Option<&controller::HssConfigSubscriptionProfile>,
) -> mconfig::HssConfigSubscriptionProfile {
    project(source)
}

impl ToMconfig for controller::DiamServerConfig {
    type Mconfig = mconfig::DiamServerConfig;

    fn to_mconfig(&self) -> Self::Mconfig {
        mconfig::DiamServerConfig {
            protocol: self.protocol.clone(),
            address: self.address.clone(),
            local_address: self.local_address.clone(),
            dest_realm: self.dest_realm.clone(),
            dest_host: self.dest_host.clone(),
        }
    }
}

impl ToMconfig for controller::DiamClientConfig {
    type Mconfig = mconfig::DiamClientConfig;

    fn to_mconfig(&self) -> Self::Mconfig {
        mconfig::DiamClientConfig {
            protocol: self.protocol.clone(),
            address: self.address.clone(),
            retransmits: self.retransmits,
            watchdog_interval: self.watchdog_interval,
            retry_count: self.retry_count,
            local_address: self.local_address.clone(),
            product_name: self.product_name.clone(),
            realm: self.realm.clone(),
            host: self.host.clone(),
            dest_realm: self.dest_realm.clone(),
            dest_host: self.dest_host.clone(),
        }
    }
}

impl ToMconfig for controller::HssConfigSubscriptionProfile {
    type Mconfig = mconfig::HssConfigSubscriptionProfile;

    fn to_mconfig(&self) -> Self::Mconfig {
        mconfig::HssConfigSubscriptionProfile {
            max_ul_bit_rate: self.max_ul_bit_rate,
            max_dl_bit_rate: self.max_dl_bit_rate,
        }
    }
}

impl ToMconfig for controller::HssConfig {
    type Mconfig = mconfig::HssConfig;

    fn to_mconfig(&self) -> Self::Mconfig {
        mconfig::HssConfig {
            server: project(self.server.as_ref()),
            lte_auth_op: self.lte_auth_op.clone(),
            lte_auth_amf: self.lte_auth_amf.clone(),
            default_sub_profile: project(self.default_sub_profile.as_ref()),
            sub_profiles: self
                .sub_profiles
                .iter()
                .map(|(imsi, profile)| (imsi.clone(), profile.to_mconfig()))
                .collect(),
        }
    }
}

impl ToMconfig for controller::S6aConfig {
    type Mconfig = mconfig::S6aConfig;

    fn to_mconfig(&self) -> Self::Mconfig {
        mconfig::S6aConfig {
            server: project(self.server.as_ref()),
        }
    }
}

impl ToMconfig for controller::GxConfig {
    type Mconfig = mconfig::GxConfig;

    fn to_mconfig(&self) -> Self::Mconfig {
        mconfig::GxConfig {
            server: project(self.server.as_ref()),
        }
    }
}

impl ToMconfig for controller::GyConfig {
    type Mconfig = mconfig::GyConfig;

    fn to_mconfig(&self) -> Self::Mconfig {
        mconfig::GyConfig {
            server: project(self.server.as_ref()),
            init_method: self.init_method,
        }
    }
}

impl ToMconfig for controller::FederationConfig {
    type Mconfig = mconfig::FederationMconfig;

    fn to_mconfig(&self) -> Self::Mconfig {
        debug!(
            s6a = self.s6a.is_some(),
            gx = self.gx.is_some(),
            gy = self.gy.is_some(),
            hss = self.hss.is_some(),
            "Projecting federation config"
        );
        mconfig::FederationMconfig {
            s6a: project(self.s6a.as_ref()),
            gx: project(self.gx.as_ref()),
            gy: project(self.gy.as_ref()),
            hss: project(self.hss.as_ref()),
        }
    }
}
