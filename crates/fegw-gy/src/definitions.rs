use fegw_core::{FegwError, Result};
use serde::{Deserialize, Serialize};

use crate::credit_control::{CreditRequestType, GrantedServiceUnit};

/// Packet-switched service context (3GPP TS 32.251)
pub const SERVICE_CONTEXT_ID_DEFAULT: &str = "32251@3gpp.org";
pub const SERVICE_ID_DEFAULT: u32 = 0;

/// Service-Context-Id and Service-Identifier stamped on every CCR
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefaults {
    pub service_context_id: String,
    pub service_identifier: u32,
}

impl Default for ServiceDefaults {
    fn default() -> Self {
        Self {
            service_context_id: SERVICE_CONTEXT_ID_DEFAULT.to_string(),
            service_identifier: SERVICE_ID_DEFAULT,
        }
    }
}

/// Final-Unit-Action: what the gateway does with the session once the final
/// grant is used up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FinalUnitAction {
    Terminate = 0x0,
    Redirect = 0x1,
    RestrictAccess = 0x2,
}

impl FinalUnitAction {
    pub const ALL: [FinalUnitAction; 3] = [Self::Terminate, Self::Redirect, Self::RestrictAccess];

    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for FinalUnitAction {
    type Error = FegwError;

    fn try_from(value: i32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_i32() == value)
            .ok_or(FegwError::UnknownEnumValue {
                avp: "Final-Unit-Action",
                value: value.into(),
            })
    }
}

/// Why a usage report is sent now (Reporting-Reason, 3GPP TS 32.299).
///
/// Tags are the registered Reporting-Reason values and go on the wire as
/// is. The list is append-only: never renumber or insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum UsedCreditsType {
    Threshold = 0,
    Qht = 1,
    /// UE disconnected, flow not in use
    Final = 2,
    /// UE hit credit limit
    QuotaExhausted = 3,
    /// Credit expired
    ValidityTimerExpired = 4,
    OtherQuotaType = 5,
    RatingConditionChange = 6,
    ForcedReauthorisation = 7,
    PoolExhausted = 8,
}

impl UsedCreditsType {
    pub const ALL: [UsedCreditsType; 9] = [
        Self::Threshold,
        Self::Qht,
        Self::Final,
        Self::QuotaExhausted,
        Self::ValidityTimerExpired,
        Self::OtherQuotaType,
        Self::RatingConditionChange,
        Self::ForcedReauthorisation,
        Self::PoolExhausted,
    ];

    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for UsedCreditsType {
    type Error = FegwError;

    fn try_from(value: i32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|reason| reason.as_i32() == value)
            .ok_or(FegwError::UnknownEnumValue {
                avp: "Reporting-Reason",
                value: value.into(),
            })
    }
}

/// Usage for one rating group since the last report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedCredits {
    pub rating_group: u32,
    pub input_octets: u64,
    pub output_octets: u64,
    pub total_octets: u64,
    pub reason: UsedCreditsType,
}

/// APN-AMBR hints sent on the initial request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QosRequestInfo {
    pub apn_agg_max_bit_rate_ul: u32,
    pub apn_agg_max_bit_rate_dl: u32,
}

/// Credit request for one charging session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditControlRequest {
    pub session_id: String,
    pub request_type: CreditRequestType,
    pub imsi: String,
    pub request_number: u32,
    pub ue_ipv4: String,
    pub spgw_ipv4: String,
    pub apn: String,
    pub imei: String,
    pub plmn_id: String,
    pub gc_id: String,
    pub user_location: Vec<u8>,
    pub msisdn: Vec<u8>,
    pub qos: Option<QosRequestInfo>,
    pub credits: Vec<UsedCredits>,
}

/// Grant for one rating group, as handed to the charging client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivedCredits {
    pub result_code: u32,
    pub rating_group: u32,
    pub granted_units: GrantedServiceUnit,
    pub validity_time: u32,
    pub is_final: bool,
    /// unused if `is_final` is false
    pub final_action: FinalUnitAction,
}

impl ReceivedCredits {
    /// Final action to apply, only when this is the final grant
    pub fn effective_final_action(&self) -> Option<FinalUnitAction> {
        self.is_final.then_some(self.final_action)
    }
}

/// OCS response to a [`CreditControlRequest`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditControlAnswer {
    pub result_code: u32,
    pub session_id: String,
    pub request_number: u32,
    pub credits: Vec<ReceivedCredits>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalUnitIndication {
    pub action: FinalUnitAction,
}

/// Multiple-Services-Credit-Control as it appears in a CCA
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsccDiameterMessage {
    pub result_code: Option<u32>,
    pub granted_service_unit: Option<GrantedServiceUnit>,
    pub validity_time: Option<u32>,
    pub final_unit_indication: Option<FinalUnitIndication>,
    pub rating_group: Option<u32>,
}

impl MsccDiameterMessage {
    /// Client view of this grant. An MSCC without its own Result-Code takes
    /// the answer-level one.
    pub fn to_received_credits(&self, answer_result_code: u32) -> ReceivedCredits {
        ReceivedCredits {
            result_code: self.result_code.unwrap_or(answer_result_code),
            rating_group: self.rating_group.unwrap_or_default(),
            granted_units: self.granted_service_unit.clone().unwrap_or_default(),
            validity_time: self.validity_time.unwrap_or_default(),
            is_final: self.final_unit_indication.is_some(),
            final_action: self
                .final_unit_indication
                .map(|fui| fui.action)
                .unwrap_or(FinalUnitAction::Terminate),
        }
    }
}

/// Credit-Control-Answer as decoded off the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CcaDiameterMessage {
    pub session_id: String,
    pub request_number: u32,
    pub result_code: u32,
    pub request_type: CreditRequestType,
    pub credit_control: Vec<MsccDiameterMessage>,
}

impl From<&CcaDiameterMessage> for CreditControlAnswer {
    fn from(msg: &CcaDiameterMessage) -> Self {
        Self {
            result_code: msg.result_code,
            session_id: msg.session_id.clone(),
            request_number: msg.request_number,
            credits: msg
                .credit_control
                .iter()
                .map(|mscc| mscc.to_received_credits(msg.result_code))
                .collect(),
        }
    }
}

/// OCS-initiated credit update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReAuthRequest {
    pub session_id: String,
    /// `None` re-authorizes every rating group of the session
    pub rating_group: Option<u32>,
}

impl ReAuthRequest {
    pub fn applies_to(&self, rating_group: u32) -> bool {
        self.rating_group.is_none_or(|rg| rg == rating_group)
    }
}

/// Answer sent back to the OCS after a credit update is initiated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReAuthAnswer {
    pub session_id: String,
    pub result_code: u32,
}

impl ReAuthAnswer {
    pub fn for_request(request: &ReAuthRequest, result_code: u32) -> Self {
        Self {
            session_id: request.session_id.clone(),
            result_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_defaults() {
        let defaults = ServiceDefaults::default();
        assert_eq!(defaults.service_context_id, "32251@3gpp.org");
        assert_eq!(defaults.service_identifier, 0);
    }

    #[test]
    fn test_final_unit_action_closed_set() {
        assert_eq!(FinalUnitAction::ALL.len(), 3);
        for (tag, action) in FinalUnitAction::ALL.iter().enumerate() {
            assert_eq!(action.as_i32(), tag as i32);
            assert_eq!(FinalUnitAction::try_from(tag as i32).unwrap(), *action);
        }
        assert!(FinalUnitAction::try_from(3).is_err());
        assert!(FinalUnitAction::try_from(-1).is_err());
    }

    #[test]
    fn test_used_credits_type_closed_set() {
        assert_eq!(UsedCreditsType::ALL.len(), 9);
        for (tag, reason) in UsedCreditsType::ALL.iter().enumerate() {
            assert_eq!(reason.as_i32(), tag as i32);
            assert_eq!(UsedCreditsType::try_from(tag as i32).unwrap(), *reason);
        }
        assert_eq!(UsedCreditsType::Final.as_i32(), 2);
        assert_eq!(UsedCreditsType::PoolExhausted.as_i32(), 8);
        assert_eq!(
            UsedCreditsType::try_from(9),
            Err(FegwError::UnknownEnumValue { avp: "Reporting-Reason", value: 9 })
        );
    }

    #[test]
    fn test_used_credits_type_serde_names() {
        let json = serde_json::to_string(&UsedCreditsType::ValidityTimerExpired).unwrap();
        assert_eq!(json, "\"VALIDITY_TIMER_EXPIRED\"");
        let qht: UsedCreditsType = serde_json::from_str("\"QHT\"").unwrap();
        assert_eq!(qht, UsedCreditsType::Qht);
    }

    #[test]
    fn test_non_final_action_is_ignored() {
        let credits = ReceivedCredits {
            result_code: 2001,
            rating_group: 1,
            granted_units: GrantedServiceUnit::default(),
            validity_time: 3600,
            is_final: false,
            final_action: FinalUnitAction::RestrictAccess,
        };
        assert_eq!(credits.effective_final_action(), None);
        // the stored field is left alone
        assert_eq!(credits.final_action, FinalUnitAction::RestrictAccess);

        let last = ReceivedCredits { is_final: true, ..credits };
        assert_eq!(last.effective_final_action(), Some(FinalUnitAction::RestrictAccess));
    }

    #[test]
    fn test_mscc_to_received_credits() {
        let mscc = MsccDiameterMessage {
            result_code: None,
            granted_service_unit: Some(GrantedServiceUnit {
                total_octets: Some(1024),
                ..Default::default()
            }),
            validity_time: Some(60),
            final_unit_indication: Some(FinalUnitIndication {
                action: FinalUnitAction::Redirect,
            }),
            rating_group: Some(7),
        };
        let credits = mscc.to_received_credits(2001);
        assert_eq!(credits.result_code, 2001);
        assert_eq!(credits.rating_group, 7);
        assert_eq!(credits.granted_units.total_octets, Some(1024));
        assert_eq!(credits.validity_time, 60);
        assert!(credits.is_final);
        assert_eq!(credits.effective_final_action(), Some(FinalUnitAction::Redirect));

        let plain = MsccDiameterMessage {
            result_code: Some(4012),
            ..Default::default()
        };
        let credits = plain.to_received_credits(2001);
        assert_eq!(credits.result_code, 4012);
        assert!(!credits.is_final);
        assert_eq!(credits.effective_final_action(), None);
    }

    #[test]
    fn test_cca_into_answer() {
        let cca = CcaDiameterMessage {
            session_id: "sess-1".to_string(),
            request_number: 4,
            result_code: 2001,
            request_type: CreditRequestType::Update,
            credit_control: vec![
                MsccDiameterMessage { rating_group: Some(1), ..Default::default() },
                MsccDiameterMessage { rating_group: Some(2), ..Default::default() },
            ],
        };
        let answer = CreditControlAnswer::from(&cca);
        assert_eq!(answer.session_id, "sess-1");
        assert_eq!(answer.request_number, 4);
        assert_eq!(answer.credits.len(), 2);
        assert_eq!(answer.credits[1].rating_group, 2);
    }

    #[test]
    fn test_reauth_scope() {
        let whole = ReAuthRequest { session_id: "s".to_string(), rating_group: None };
        assert!(whole.applies_to(0));
        assert!(whole.applies_to(42));

        let scoped = ReAuthRequest { session_id: "s".to_string(), rating_group: Some(0) };
        assert!(scoped.applies_to(0));
        assert!(!scoped.applies_to(42));

        let raa = ReAuthAnswer::for_request(&scoped, 2001);
        assert_eq!(raa.session_id, "s");
        assert_eq!(raa.result_code, 2001);
    }

    #[test]
    fn test_values_are_thread_safe() {
        assert_send_sync::<CreditControlRequest>();
        assert_send_sync::<CreditControlAnswer>();
        assert_send_sync::<ReAuthRequest>();
        assert_send_sync::<CcaDiameterMessage>();
    }
}
