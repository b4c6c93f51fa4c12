use crate::data_type::AvpDataType;

/// 3GPP vendor identifier
pub const VENDOR_3GPP: u32 = 10415;

/// AVPs used on the Gy interface: RFC 6733 base, RFC 4006 credit control
/// and the 3GPP TS 29.061 / TS 32.299 / TS 29.212 additions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardAvpCode {
    // ========================================
    // RFC 6733 Base Protocol
    // ========================================
    FramedIpAddress,
    CalledStationId,
    SessionId,
    OriginHost,
    ResultCode,

    // ========================================
    // RFC 4006 Credit Control
    // ========================================
    CcInputOctets,
    CcOutputOctets,
    CcRequestNumber,
    CcRequestType,
    CcTotalOctets,
    FinalUnitIndication,
    GrantedServiceUnit,
    RatingGroup,
    RequestedServiceUnit,
    ServiceIdentifier,
    SubscriptionId,
    SubscriptionIdData,
    UsedServiceUnit,
    ValidityTime,
    FinalUnitAction,
    SubscriptionIdType,
    MultipleServicesCreditControl,
    UserEquipmentInfo,
    UserEquipmentInfoType,
    UserEquipmentInfoValue,
    ServiceContextId,

    // ========================================
    // 3GPP (vendor 10415)
    // ========================================
    TgppChargingId,
    TgppSgsnAddress,
    TgppSgsnMccMnc,
    TgppUserLocationInfo,
    ReportingReason,
    QosInformation,
    ApnAggregateMaxBitrateDl,
    ApnAggregateMaxBitrateUl,
}

impl StandardAvpCode {
    /// Every dictionary entry, in code order within each vendor space
    pub const ALL: [StandardAvpCode; 34] = [
        Self::FramedIpAddress,
        Self::CalledStationId,
        Self::SessionId,
        Self::OriginHost,
        Self::ResultCode,
        Self::CcInputOctets,
        Self::CcOutputOctets,
        Self::CcRequestNumber,
        Self::CcRequestType,
        Self::CcTotalOctets,
        Self::FinalUnitIndication,
        Self::GrantedServiceUnit,
        Self::RatingGroup,
        Self::RequestedServiceUnit,
        Self::ServiceIdentifier,
        Self::SubscriptionId,
        Self::SubscriptionIdData,
        Self::UsedServiceUnit,
        Self::ValidityTime,
        Self::FinalUnitAction,
        Self::SubscriptionIdType,
        Self::MultipleServicesCreditControl,
        Self::UserEquipmentInfo,
        Self::UserEquipmentInfoType,
        Self::UserEquipmentInfoValue,
        Self::ServiceContextId,
        Self::TgppChargingId,
        Self::TgppSgsnAddress,
        Self::TgppSgsnMccMnc,
        Self::TgppUserLocationInfo,
        Self::ReportingReason,
        Self::QosInformation,
        Self::ApnAggregateMaxBitrateDl,
        Self::ApnAggregateMaxBitrateUl,
    ];

    /// Resolve a dictionary name such as "Rating-Group"
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|avp| avp.name() == name)
    }

    /// Get AVP code
    pub fn code(&self) -> u32 {
        match self {
            Self::FramedIpAddress => 8,
            Self::CalledStationId => 30,
            Self::SessionId => 263,
            Self::OriginHost => 264,
            Self::ResultCode => 268,
            Self::CcInputOctets => 412,
            Self::CcOutputOctets => 414,
            Self::CcRequestNumber => 415,
            Self::CcRequestType => 416,
            Self::CcTotalOctets => 421,
            Self::FinalUnitIndication => 430,
            Self::GrantedServiceUnit => 431,
            Self::RatingGroup => 432,
            Self::RequestedServiceUnit => 437,
            Self::ServiceIdentifier => 439,
            Self::SubscriptionId => 443,
            Self::SubscriptionIdData => 444,
            Self::UsedServiceUnit => 446,
            Self::ValidityTime => 448,
            Self::FinalUnitAction => 449,
            Self::SubscriptionIdType => 450,
            Self::MultipleServicesCreditControl => 456,
            Self::UserEquipmentInfo => 458,
            Self::UserEquipmentInfoType => 459,
            Self::UserEquipmentInfoValue => 460,
            Self::ServiceContextId => 461,
            Self::TgppChargingId => 2,
            Self::TgppSgsnAddress => 6,
            Self::TgppSgsnMccMnc => 18,
            Self::TgppUserLocationInfo => 22,
            Self::ReportingReason => 872,
            Self::QosInformation => 1016,
            Self::ApnAggregateMaxBitrateDl => 1040,
            Self::ApnAggregateMaxBitrateUl => 1041,
        }
    }

    /// Get vendor id, `None` for IETF AVPs
    pub fn vendor_id(&self) -> Option<u32> {
        match self {
            Self::TgppChargingId
            | Self::TgppSgsnAddress
            | Self::TgppSgsnMccMnc
            | Self::TgppUserLocationInfo
            | Self::ReportingReason
            | Self::QosInformation
            | Self::ApnAggregateMaxBitrateDl
            | Self::ApnAggregateMaxBitrateUl => Some(VENDOR_3GPP),
            _ => None,
        }
    }

    /// Get AVP name
    pub fn name(&self) -> &'static str {
        match self {
            Self::FramedIpAddress => "Framed-IP-Address",
            Self::CalledStationId => "Called-Station-Id",
            Self::SessionId => "Session-Id",
            Self::OriginHost => "Origin-Host",
            Self::ResultCode => "Result-Code",
            Self::CcInputOctets => "CC-Input-Octets",
            Self::CcOutputOctets => "CC-Output-Octets",
            Self::CcRequestNumber => "CC-Request-Number",
            Self::CcRequestType => "CC-Request-Type",
            Self::CcTotalOctets => "CC-Total-Octets",
            Self::FinalUnitIndication => "Final-Unit-Indication",
            Self::GrantedServiceUnit => "Granted-Service-Unit",
            Self::RatingGroup => "Rating-Group",
            Self::RequestedServiceUnit => "Requested-Service-Unit",
            Self::ServiceIdentifier => "Service-Identifier",
            Self::SubscriptionId => "Subscription-Id",
            Self::SubscriptionIdData => "Subscription-Id-Data",
            Self::UsedServiceUnit => "Used-Service-Unit",
            Self::ValidityTime => "Validity-Time",
            Self::FinalUnitAction => "Final-Unit-Action",
            Self::SubscriptionIdType => "Subscription-Id-Type",
            Self::MultipleServicesCreditControl => "Multiple-Services-Credit-Control",
            Self::UserEquipmentInfo => "User-Equipment-Info",
            Self::UserEquipmentInfoType => "User-Equipment-Info-Type",
            Self::UserEquipmentInfoValue => "User-Equipment-Info-Value",
            Self::ServiceContextId => "Service-Context-Id",
            Self::TgppChargingId => "3GPP-Charging-Id",
            Self::TgppSgsnAddress => "3GPP-SGSN-Address",
            Self::TgppSgsnMccMnc => "3GPP-SGSN-MCC-MNC",
            Self::TgppUserLocationInfo => "3GPP-User-Location-Info",
            Self::ReportingReason => "Reporting-Reason",
            Self::QosInformation => "QoS-Information",
            Self::ApnAggregateMaxBitrateDl => "APN-Aggregate-Max-Bitrate-DL",
            Self::ApnAggregateMaxBitrateUl => "APN-Aggregate-Max-Bitrate-UL",
        }
    }

    /// Get AVP data type
    pub fn data_type(&self) -> AvpDataType {
        match self {
            Self::FramedIpAddress => AvpDataType::OctetString,
            Self::CalledStationId => AvpDataType::Utf8String,
            Self::SessionId => AvpDataType::Utf8String,
            Self::OriginHost => AvpDataType::DiameterIdentity,
            Self::ResultCode => AvpDataType::Unsigned32,
            Self::CcInputOctets => AvpDataType::Unsigned64,
            Self::CcOutputOctets => AvpDataType::Unsigned64,
            Self::CcRequestNumber => AvpDataType::Unsigned32,
            Self::CcRequestType => AvpDataType::Enumerated,
            Self::CcTotalOctets => AvpDataType::Unsigned64,
            Self::FinalUnitIndication => AvpDataType::Grouped,
            Self::GrantedServiceUnit => AvpDataType::Grouped,
            Self::RatingGroup => AvpDataType::Unsigned32,
            Self::RequestedServiceUnit => AvpDataType::Grouped,
            Self::ServiceIdentifier => AvpDataType::Unsigned32,
            Self::SubscriptionId => AvpDataType::Grouped,
            Self::SubscriptionIdData => AvpDataType::Utf8String,
            Self::UsedServiceUnit => AvpDataType::Grouped,
            Self::ValidityTime => AvpDataType::Unsigned32,
            Self::FinalUnitAction => AvpDataType::Enumerated,
            Self::SubscriptionIdType => AvpDataType::Enumerated,
            Self::MultipleServicesCreditControl => AvpDataType::Grouped,
            Self::UserEquipmentInfo => AvpDataType::Grouped,
            Self::UserEquipmentInfoType => AvpDataType::Enumerated,
            Self::UserEquipmentInfoValue => AvpDataType::OctetString,
            Self::ServiceContextId => AvpDataType::Utf8String,
            Self::TgppChargingId => AvpDataType::OctetString,
            Self::TgppSgsnAddress => AvpDataType::Address,
            Self::TgppSgsnMccMnc => AvpDataType::Utf8String,
            Self::TgppUserLocationInfo => AvpDataType::OctetString,
            Self::ReportingReason => AvpDataType::Enumerated,
            Self::QosInformation => AvpDataType::Grouped,
            Self::ApnAggregateMaxBitrateDl => AvpDataType::Unsigned32,
            Self::ApnAggregateMaxBitrateUl => AvpDataType::Unsigned32,
        }
    }
}
