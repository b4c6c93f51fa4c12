//! Credit-Control-Request encoding.

use std::net::{IpAddr, Ipv4Addr};

use fegw_core::{FegwError, Result};
use fegw_diameter_dict::{Avp, AvpValue, StandardAvpCode};
use tracing::debug;

use crate::avp::{put, put_grouped, ToAvps};
use crate::credit_control::CreditRequestType;
use crate::definitions::{CreditControlRequest, QosRequestInfo, ServiceDefaults, UsedCredits};
use crate::mapping::{FieldBinding, WireMapping};

/// Subscription-Id-Type values
pub const SUBSCRIPTION_ID_TYPE_E164: i32 = 0;
pub const SUBSCRIPTION_ID_TYPE_IMSI: i32 = 1;

/// User-Equipment-Info-Type IMEISV
pub const USER_EQUIPMENT_INFO_TYPE_IMEISV: i32 = 0;

impl ToAvps for QosRequestInfo {
    fn to_avps(&self) -> Vec<Avp> {
        vec![
            put(
                &Self::APN_AGG_MAX_BIT_RATE_UL,
                AvpValue::Unsigned32(self.apn_agg_max_bit_rate_ul),
            ),
            put(
                &Self::APN_AGG_MAX_BIT_RATE_DL,
                AvpValue::Unsigned32(self.apn_agg_max_bit_rate_dl),
            ),
        ]
    }
}

impl ToAvps for UsedCredits {
    /// Contents of one Multiple-Services-Credit-Control group
    fn to_avps(&self) -> Vec<Avp> {
        vec![
            put(&Self::RATING_GROUP, AvpValue::Unsigned32(self.rating_group)),
            Avp::new(
                StandardAvpCode::UsedServiceUnit,
                AvpValue::Grouped(vec![
                    put(&Self::INPUT_OCTETS, AvpValue::Unsigned64(self.input_octets)),
                    put(&Self::OUTPUT_OCTETS, AvpValue::Unsigned64(self.output_octets)),
                    put(&Self::TOTAL_OCTETS, AvpValue::Unsigned64(self.total_octets)),
                ]),
            ),
            put(&Self::REASON, AvpValue::Enumerated(self.reason.as_i32())),
        ]
    }
}

fn subscription_id(binding: &FieldBinding, id_type: i32, data: String) -> Avp {
    put_grouped(
        binding,
        vec![
            Avp::new(StandardAvpCode::SubscriptionIdType, AvpValue::Enumerated(id_type)),
            Avp::new(StandardAvpCode::SubscriptionIdData, AvpValue::Utf8String(data)),
        ],
    )
}

fn parse_ipv4(binding: &FieldBinding, addr: &str) -> Result<Ipv4Addr> {
    addr.parse().map_err(|e: std::net::AddrParseError| FegwError::InvalidAvpValue {
        avp: binding.wire_name(),
        reason: format!("{addr:?}: {e}"),
    })
}

fn requested_service_unit() -> Avp {
    Avp::new(StandardAvpCode::RequestedServiceUnit, AvpValue::Grouped(Vec::new()))
}

impl CreditControlRequest {
    /// Encode as a CCR. Empty optional fields are left out; every report in
    /// `credits` becomes its own Multiple-Services-Credit-Control, asking for
    /// more quota unless the session is terminating.
    pub fn to_avps_with(&self, defaults: &ServiceDefaults) -> Result<Vec<Avp>> {
        let mut avps = vec![
            put(&Self::SESSION_ID, AvpValue::Utf8String(self.session_id.clone())),
            put(
                &ServiceDefaults::SERVICE_CONTEXT_ID,
                AvpValue::Utf8String(defaults.service_context_id.clone()),
            ),
            put(&Self::REQUEST_TYPE, AvpValue::Enumerated(self.request_type.as_i32())),
            put(&Self::REQUEST_NUMBER, AvpValue::Unsigned32(self.request_number)),
            put(
                &ServiceDefaults::SERVICE_IDENTIFIER,
                AvpValue::Unsigned32(defaults.service_identifier),
            ),
        ];

        if !self.imsi.is_empty() {
            avps.push(subscription_id(&Self::IMSI, SUBSCRIPTION_ID_TYPE_IMSI, self.imsi.clone()));
        }
        if !self.msisdn.is_empty() {
            let msisdn = String::from_utf8(self.msisdn.clone()).map_err(|e| {
                FegwError::InvalidAvpValue {
                    avp: Self::MSISDN.wire_name(),
                    reason: format!("MSISDN is not UTF-8: {e}"),
                }
            })?;
            avps.push(subscription_id(&Self::MSISDN, SUBSCRIPTION_ID_TYPE_E164, msisdn));
        }
        if !self.ue_ipv4.is_empty() {
            let addr = parse_ipv4(&Self::UE_IPV4, &self.ue_ipv4)?;
            avps.push(put(&Self::UE_IPV4, AvpValue::OctetString(addr.octets().to_vec())));
        }
        if !self.spgw_ipv4.is_empty() {
            let addr = parse_ipv4(&Self::SPGW_IPV4, &self.spgw_ipv4)?;
            avps.push(put(&Self::SPGW_IPV4, AvpValue::Address(IpAddr::V4(addr))));
        }
        if !self.apn.is_empty() {
            avps.push(put(&Self::APN, AvpValue::Utf8String(self.apn.clone())));
        }
        if !self.imei.is_empty() {
            avps.push(put_grouped(
                &Self::IMEI,
                vec![
                    Avp::new(
                        StandardAvpCode::UserEquipmentInfoType,
                        AvpValue::Enumerated(USER_EQUIPMENT_INFO_TYPE_IMEISV),
                    ),
                    Avp::new(
                        StandardAvpCode::UserEquipmentInfoValue,
                        AvpValue::OctetString(self.imei.as_bytes().to_vec()),
                    ),
                ],
            ));
        }
        if !self.plmn_id.is_empty() {
            avps.push(put(&Self::PLMN_ID, AvpValue::Utf8String(self.plmn_id.clone())));
        }
        if !self.gc_id.is_empty() {
            avps.push(put(&Self::GC_ID, AvpValue::OctetString(self.gc_id.as_bytes().to_vec())));
        }
        if !self.user_location.is_empty() {
            avps.push(put(&Self::USER_LOCATION, AvpValue::OctetString(self.user_location.clone())));
        }
        if let Some(qos) = &self.qos {
            avps.push(put_grouped(&Self::QOS, qos.to_avps()));
        }

        let wants_quota = self.request_type != CreditRequestType::Terminate;
        for credits in &self.credits {
            let mut mscc = credits.to_avps();
            if wants_quota {
                mscc.push(requested_service_unit());
            }
            avps.push(put_grouped(&Self::CREDITS, mscc));
        }
        if self.credits.is_empty() && self.request_type == CreditRequestType::Initial {
            avps.push(put_grouped(&Self::CREDITS, vec![requested_service_unit()]));
        }

        debug!(
            session_id = %self.session_id,
            request_type = ?self.request_type,
            request_number = self.request_number,
            reports = self.credits.len(),
            "Encoded {}",
            Self::MESSAGE
        );
        Ok(avps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::UsedCreditsType;
    use fegw_diameter_dict::DictionaryManager;

    fn request(request_type: CreditRequestType) -> CreditControlRequest {
        CreditControlRequest {
            session_id: "IMSI001010000000001-1234".to_string(),
            request_type,
            imsi: "001010000000001".to_string(),
            request_number: 0,
            ue_ipv4: "192.168.128.12".to_string(),
            spgw_ipv4: "10.0.2.1".to_string(),
            apn: "internet".to_string(),
            imei: "3520990017614823".to_string(),
            plmn_id: "00101".to_string(),
            gc_id: String::new(),
            user_location: vec![0x82, 0x00, 0xf1, 0x10],
            msisdn: b"5551234".to_vec(),
            qos: Some(QosRequestInfo {
                apn_agg_max_bit_rate_ul: 1_000_000,
                apn_agg_max_bit_rate_dl: 2_000_000,
            }),
            credits: Vec::new(),
        }
    }

    fn find(avps: &[Avp], code: StandardAvpCode) -> Vec<&AvpValue> {
        avps.iter().filter(|avp| avp.code == code).map(|avp| &avp.value).collect()
    }

    #[test]
    fn test_initial_request() {
        let avps = request(CreditRequestType::Initial)
            .to_avps_with(&ServiceDefaults::default())
            .unwrap();
        assert!(DictionaryManager::new().validate(&avps).is_ok());

        assert_eq!(avps[0].code, StandardAvpCode::SessionId);
        assert_eq!(
            find(&avps, StandardAvpCode::ServiceContextId),
            vec![&AvpValue::Utf8String("32251@3gpp.org".to_string())]
        );
        assert_eq!(find(&avps, StandardAvpCode::ServiceIdentifier), vec![&AvpValue::Unsigned32(0)]);
        assert_eq!(find(&avps, StandardAvpCode::CcRequestType), vec![&AvpValue::Enumerated(1)]);
        assert_eq!(find(&avps, StandardAvpCode::SubscriptionId).len(), 2);
        assert_eq!(
            find(&avps, StandardAvpCode::FramedIpAddress),
            vec![&AvpValue::OctetString(vec![192, 168, 128, 12])]
        );
        // gc_id was empty
        assert!(find(&avps, StandardAvpCode::TgppChargingId).is_empty());

        let mscc = find(&avps, StandardAvpCode::MultipleServicesCreditControl);
        assert_eq!(mscc.len(), 1);
        let children = mscc[0].as_grouped().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].code, StandardAvpCode::RequestedServiceUnit);
    }

    #[test]
    fn test_update_reports_usage() {
        let mut ccr = request(CreditRequestType::Update);
        ccr.request_number = 1;
        ccr.credits = vec![UsedCredits {
            rating_group: 10,
            input_octets: 100,
            output_octets: 200,
            total_octets: 300,
            reason: UsedCreditsType::QuotaExhausted,
        }];
        let defaults = ServiceDefaults {
            service_context_id: "custom@operator".to_string(),
            service_identifier: 7,
        };
        let avps = ccr.to_avps_with(&defaults).unwrap();

        assert_eq!(
            find(&avps, StandardAvpCode::ServiceContextId),
            vec![&AvpValue::Utf8String("custom@operator".to_string())]
        );
        let mscc = find(&avps, StandardAvpCode::MultipleServicesCreditControl);
        assert_eq!(mscc.len(), 1);
        let children = mscc[0].as_grouped().unwrap();
        assert_eq!(find(children, StandardAvpCode::RatingGroup), vec![&AvpValue::Unsigned32(10)]);
        assert_eq!(find(children, StandardAvpCode::ReportingReason), vec![&AvpValue::Enumerated(3)]);
        assert_eq!(find(children, StandardAvpCode::RequestedServiceUnit).len(), 1);
        let usu = find(children, StandardAvpCode::UsedServiceUnit)[0].as_grouped().unwrap();
        assert_eq!(find(usu, StandardAvpCode::CcTotalOctets), vec![&AvpValue::Unsigned64(300)]);
    }

    #[test]
    fn test_terminate_requests_no_quota() {
        let mut ccr = request(CreditRequestType::Terminate);
        ccr.credits = vec![UsedCredits {
            rating_group: 1,
            input_octets: 0,
            output_octets: 0,
            total_octets: 0,
            reason: UsedCreditsType::Final,
        }];
        let avps = ccr.to_avps_with(&ServiceDefaults::default()).unwrap();
        let mscc = find(&avps, StandardAvpCode::MultipleServicesCreditControl);
        let children = mscc[0].as_grouped().unwrap();
        assert!(find(children, StandardAvpCode::RequestedServiceUnit).is_empty());
    }

    #[test]
    fn test_invalid_ue_address() {
        let mut ccr = request(CreditRequestType::Initial);
        ccr.ue_ipv4 = "not-an-ip".to_string();
        match ccr.to_avps_with(&ServiceDefaults::default()) {
            Err(FegwError::InvalidAvpValue { avp, .. }) => assert_eq!(avp, "Framed-IP-Address"),
            other => panic!("Expected InvalidAvpValue, got {other:?}"),
        }
    }

    #[test]
    fn test_non_utf8_msisdn_is_rejected() {
        let mut ccr = request(CreditRequestType::Initial);
        ccr.msisdn = vec![0x91, 0x55, 0x21, 0x43];
        match ccr.to_avps_with(&ServiceDefaults::default()) {
            Err(FegwError::InvalidAvpValue { avp, .. }) => assert_eq!(avp, "Subscription-Id"),
            other => panic!("Expected InvalidAvpValue, got {other:?}"),
        }
    }

    #[test]
    fn test_msisdn_encoded_verbatim() {
        let avps = request(CreditRequestType::Initial)
            .to_avps_with(&ServiceDefaults::default())
            .unwrap();
        let msisdn: Vec<_> = find(&avps, StandardAvpCode::SubscriptionId)
            .into_iter()
            .filter_map(AvpValue::as_grouped)
            .filter(|group| {
                find(group, StandardAvpCode::SubscriptionIdType)
                    == vec![&AvpValue::Enumerated(SUBSCRIPTION_ID_TYPE_E164)]
            })
            .flat_map(|group| find(group, StandardAvpCode::SubscriptionIdData))
            .collect();
        assert_eq!(msisdn, vec![&AvpValue::Utf8String("5551234".to_string())]);
    }
}
