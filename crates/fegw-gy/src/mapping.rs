//! Field to AVP bindings.
//!
//! Every wire-shaped type lists which AVP each of its fields travels in.
//! The AVP list codec in [`crate::avp`] and [`crate::request`] reads and
//! writes fields through these bindings only, so the tables are the single
//! place the field set and the attribute names are fixed.

use fegw_diameter_dict::StandardAvpCode;

use crate::credit_control::GrantedServiceUnit;
use crate::definitions::{
    CcaDiameterMessage, CreditControlRequest, FinalUnitIndication, MsccDiameterMessage,
    QosRequestInfo, ReAuthAnswer, ReAuthRequest, ServiceDefaults, UsedCredits,
};

/// How often a bound AVP may occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    /// May be absent; absence is kept distinct from a zero value
    Optional,
    Repeated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBinding {
    pub field: &'static str,
    pub avp: StandardAvpCode,
    pub presence: Presence,
}

impl FieldBinding {
    pub const fn required(field: &'static str, avp: StandardAvpCode) -> Self {
        Self { field, avp, presence: Presence::Required }
    }

    pub const fn optional(field: &'static str, avp: StandardAvpCode) -> Self {
        Self { field, avp, presence: Presence::Optional }
    }

    pub const fn repeated(field: &'static str, avp: StandardAvpCode) -> Self {
        Self { field, avp, presence: Presence::Repeated }
    }

    /// Wire attribute name, e.g. "CC-Request-Number"
    pub fn wire_name(&self) -> &'static str {
        self.avp.name()
    }
}

/// Binding table of a message or grouped AVP
pub trait WireMapping {
    /// Wire name of the message or grouped AVP
    const MESSAGE: &'static str;
    const FIELDS: &'static [FieldBinding];

    fn binding(field: &str) -> Option<&'static FieldBinding> {
        Self::FIELDS.iter().find(|binding| binding.field == field)
    }
}

impl GrantedServiceUnit {
    pub const TOTAL_OCTETS: FieldBinding =
        FieldBinding::optional("total_octets", StandardAvpCode::CcTotalOctets);
    pub const INPUT_OCTETS: FieldBinding =
        FieldBinding::optional("input_octets", StandardAvpCode::CcInputOctets);
    pub const OUTPUT_OCTETS: FieldBinding =
        FieldBinding::optional("output_octets", StandardAvpCode::CcOutputOctets);
}

impl WireMapping for GrantedServiceUnit {
    const MESSAGE: &'static str = "Granted-Service-Unit";
    const FIELDS: &'static [FieldBinding] =
        &[Self::TOTAL_OCTETS, Self::INPUT_OCTETS, Self::OUTPUT_OCTETS];
}

impl FinalUnitIndication {
    pub const ACTION: FieldBinding =
        FieldBinding::required("action", StandardAvpCode::FinalUnitAction);
}

impl WireMapping for FinalUnitIndication {
    const MESSAGE: &'static str = "Final-Unit-Indication";
    const FIELDS: &'static [FieldBinding] = &[Self::ACTION];
}

impl MsccDiameterMessage {
    pub const RESULT_CODE: FieldBinding =
        FieldBinding::optional("result_code", StandardAvpCode::ResultCode);
    pub const GRANTED_SERVICE_UNIT: FieldBinding =
        FieldBinding::optional("granted_service_unit", StandardAvpCode::GrantedServiceUnit);
    pub const VALIDITY_TIME: FieldBinding =
        FieldBinding::optional("validity_time", StandardAvpCode::ValidityTime);
    pub const FINAL_UNIT_INDICATION: FieldBinding =
        FieldBinding::optional("final_unit_indication", StandardAvpCode::FinalUnitIndication);
    pub const RATING_GROUP: FieldBinding =
        FieldBinding::optional("rating_group", StandardAvpCode::RatingGroup);
}

impl WireMapping for MsccDiameterMessage {
    const MESSAGE: &'static str = "Multiple-Services-Credit-Control";
    const FIELDS: &'static [FieldBinding] = &[
        Self::RESULT_CODE,
        Self::GRANTED_SERVICE_UNIT,
        Self::VALIDITY_TIME,
        Self::FINAL_UNIT_INDICATION,
        Self::RATING_GROUP,
    ];
}

impl CcaDiameterMessage {
    pub const SESSION_ID: FieldBinding =
        FieldBinding::required("session_id", StandardAvpCode::SessionId);
    pub const REQUEST_NUMBER: FieldBinding =
        FieldBinding::required("request_number", StandardAvpCode::CcRequestNumber);
    pub const RESULT_CODE: FieldBinding =
        FieldBinding::required("result_code", StandardAvpCode::ResultCode);
    pub const REQUEST_TYPE: FieldBinding =
        FieldBinding::required("request_type", StandardAvpCode::CcRequestType);
    pub const CREDIT_CONTROL: FieldBinding =
        FieldBinding::repeated("credit_control", StandardAvpCode::MultipleServicesCreditControl);
}

impl WireMapping for CcaDiameterMessage {
    const MESSAGE: &'static str = "Credit-Control-Answer";
    const FIELDS: &'static [FieldBinding] = &[
        Self::SESSION_ID,
        Self::REQUEST_NUMBER,
        Self::RESULT_CODE,
        Self::REQUEST_TYPE,
        Self::CREDIT_CONTROL,
    ];
}

impl ReAuthRequest {
    pub const SESSION_ID: FieldBinding =
        FieldBinding::required("session_id", StandardAvpCode::SessionId);
    pub const RATING_GROUP: FieldBinding =
        FieldBinding::optional("rating_group", StandardAvpCode::RatingGroup);
}

impl WireMapping for ReAuthRequest {
    const MESSAGE: &'static str = "Re-Auth-Request";
    const FIELDS: &'static [FieldBinding] = &[Self::SESSION_ID, Self::RATING_GROUP];
}

impl ReAuthAnswer {
    pub const SESSION_ID: FieldBinding =
        FieldBinding::required("session_id", StandardAvpCode::SessionId);
    pub const RESULT_CODE: FieldBinding =
        FieldBinding::required("result_code", StandardAvpCode::ResultCode);
}

impl WireMapping for ReAuthAnswer {
    const MESSAGE: &'static str = "Re-Auth-Answer";
    const FIELDS: &'static [FieldBinding] = &[Self::SESSION_ID, Self::RESULT_CODE];
}

impl QosRequestInfo {
    pub const APN_AGG_MAX_BIT_RATE_UL: FieldBinding =
        FieldBinding::required("apn_agg_max_bit_rate_ul", StandardAvpCode::ApnAggregateMaxBitrateUl);
    pub const APN_AGG_MAX_BIT_RATE_DL: FieldBinding =
        FieldBinding::required("apn_agg_max_bit_rate_dl", StandardAvpCode::ApnAggregateMaxBitrateDl);
}

impl WireMapping for QosRequestInfo {
    const MESSAGE: &'static str = "QoS-Information";
    const FIELDS: &'static [FieldBinding] =
        &[Self::APN_AGG_MAX_BIT_RATE_UL, Self::APN_AGG_MAX_BIT_RATE_DL];
}

impl ServiceDefaults {
    pub const SERVICE_CONTEXT_ID: FieldBinding =
        FieldBinding::required("service_context_id", StandardAvpCode::ServiceContextId);
    pub const SERVICE_IDENTIFIER: FieldBinding =
        FieldBinding::required("service_identifier", StandardAvpCode::ServiceIdentifier);
}

impl WireMapping for ServiceDefaults {
    const MESSAGE: &'static str = "Credit-Control-Request";
    const FIELDS: &'static [FieldBinding] = &[Self::SERVICE_CONTEXT_ID, Self::SERVICE_IDENTIFIER];
}

// Octet counters travel inside Used-Service-Unit, the rest directly in the
// Multiple-Services-Credit-Control group.
impl UsedCredits {
    pub const RATING_GROUP: FieldBinding =
        FieldBinding::required("rating_group", StandardAvpCode::RatingGroup);
    pub const INPUT_OCTETS: FieldBinding =
        FieldBinding::required("input_octets", StandardAvpCode::CcInputOctets);
    pub const OUTPUT_OCTETS: FieldBinding =
        FieldBinding::required("output_octets", StandardAvpCode::CcOutputOctets);
    pub const TOTAL_OCTETS: FieldBinding =
        FieldBinding::required("total_octets", StandardAvpCode::CcTotalOctets);
    pub const REASON: FieldBinding =
        FieldBinding::required("reason", StandardAvpCode::ReportingReason);
}

impl WireMapping for UsedCredits {
    const MESSAGE: &'static str = "Multiple-Services-Credit-Control";
    const FIELDS: &'static [FieldBinding] = &[
        Self::RATING_GROUP,
        Self::INPUT_OCTETS,
        Self::OUTPUT_OCTETS,
        Self::TOTAL_OCTETS,
        Self::REASON,
    ];
}

// IMSI and MSISDN share Subscription-Id and are told apart by
// Subscription-Id-Type; IMEI travels inside User-Equipment-Info.
impl CreditControlRequest {
    pub const SESSION_ID: FieldBinding =
        FieldBinding::required("session_id", StandardAvpCode::SessionId);
    pub const REQUEST_TYPE: FieldBinding =
        FieldBinding::required("request_type", StandardAvpCode::CcRequestType);
    pub const REQUEST_NUMBER: FieldBinding =
        FieldBinding::required("request_number", StandardAvpCode::CcRequestNumber);
    pub const IMSI: FieldBinding = FieldBinding::optional("imsi", StandardAvpCode::SubscriptionId);
    pub const MSISDN: FieldBinding =
        FieldBinding::optional("msisdn", StandardAvpCode::SubscriptionId);
    pub const UE_IPV4: FieldBinding =
        FieldBinding::optional("ue_ipv4", StandardAvpCode::FramedIpAddress);
    pub const SPGW_IPV4: FieldBinding =
        FieldBinding::optional("spgw_ipv4", StandardAvpCode::TgppSgsnAddress);
    pub const APN: FieldBinding = FieldBinding::optional("apn", StandardAvpCode::CalledStationId);
    pub const IMEI: FieldBinding =
        FieldBinding::optional("imei", StandardAvpCode::UserEquipmentInfo);
    pub const PLMN_ID: FieldBinding =
        FieldBinding::optional("plmn_id", StandardAvpCode::TgppSgsnMccMnc);
    pub const GC_ID: FieldBinding = FieldBinding::optional("gc_id", StandardAvpCode::TgppChargingId);
    pub const USER_LOCATION: FieldBinding =
        FieldBinding::optional("user_location", StandardAvpCode::TgppUserLocationInfo);
    pub const QOS: FieldBinding = FieldBinding::optional("qos", StandardAvpCode::QosInformation);
    pub const CREDITS: FieldBinding =
        FieldBinding::repeated("credits", StandardAvpCode::MultipleServicesCreditControl);
}

impl WireMapping for CreditControlRequest {
    const MESSAGE: &'static str = "Credit-Control-Request";
    const FIELDS: &'static [FieldBinding] = &[
        Self::SESSION_ID,
        Self::REQUEST_TYPE,
        Self::REQUEST_NUMBER,
        Self::IMSI,
        Self::MSISDN,
        Self::UE_IPV4,
        Self::SPGW_IPV4,
        Self::APN,
        Self::IMEI,
        Self::PLMN_ID,
        Self::GC_ID,
        Self::USER_LOCATION,
        Self::QOS,
        Self::CREDITS,
    ];
}
