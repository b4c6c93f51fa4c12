//! Logical AVP list encoding for Gy messages.
//!
//! Messages map to and from a `Vec<Avp>` through their [`FieldBinding`]s.
//! Turning that list into bytes is the transport's business.

use fegw_core::{FegwError, Result};
use fegw_diameter_dict::{Avp, AvpValue};
use tracing::{debug, trace};

use crate::credit_control::{CreditRequestType, GrantedServiceUnit};
use crate::definitions::{
    CcaDiameterMessage, FinalUnitAction, FinalUnitIndication, MsccDiameterMessage, ReAuthAnswer,
    ReAuthRequest,
};
use crate::mapping::{FieldBinding, WireMapping};

pub trait ToAvps {
    fn to_avps(&self) -> Vec<Avp>;
}

pub trait FromAvps: Sized {
    fn from_avps(avps: &[Avp]) -> Result<Self>;
}

/// Field lookups over a decoded AVP list. Unknown AVPs are skipped.
pub(crate) struct AvpReader<'a> {
    avps: &'a [Avp],
}

impl<'a> AvpReader<'a> {
    pub(crate) fn new(avps: &'a [Avp]) -> Self {
        Self { avps }
    }

    /// The single occurrence of a non-repeated field
    fn first(&self, binding: &FieldBinding) -> Result<Option<&'a AvpValue>> {
        let mut found = self.avps.iter().filter(|avp| avp.code == binding.avp);
        let value = found.next().map(|avp| &avp.value);
        if found.next().is_some() {
            return Err(FegwError::Decode(format!(
                "{} occurs more than once",
                binding.wire_name()
            )));
        }
        Ok(value)
    }

    fn required(&self, binding: &FieldBinding) -> Result<&'a AvpValue> {
        self.first(binding)?
            .ok_or(FegwError::MissingAvp(binding.wire_name()))
    }

    pub(crate) fn u32(&self, binding: &FieldBinding) -> Result<u32> {
        let value = self.required(binding)?;
        value.as_u32().ok_or_else(|| mismatch(binding, value))
    }

    pub(crate) fn opt_u32(&self, binding: &FieldBinding) -> Result<Option<u32>> {
        self.first(binding)?
            .map(|value| value.as_u32().ok_or_else(|| mismatch(binding, value)))
            .transpose()
    }

    pub(crate) fn opt_u64(&self, binding: &FieldBinding) -> Result<Option<u64>> {
        self.first(binding)?
            .map(|value| value.as_u64().ok_or_else(|| mismatch(binding, value)))
            .transpose()
    }

    pub(crate) fn string(&self, binding: &FieldBinding) -> Result<String> {
        let value = self.required(binding)?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch(binding, value))
    }

    pub(crate) fn enumerated(&self, binding: &FieldBinding) -> Result<i32> {
        let value = self.required(binding)?;
        value.as_enumerated().ok_or_else(|| mismatch(binding, value))
    }

    pub(crate) fn opt_grouped(&self, binding: &FieldBinding) -> Result<Option<&'a [Avp]>> {
        self.first(binding)?
            .map(|value| value.as_grouped().ok_or_else(|| mismatch(binding, value)))
            .transpose()
    }

    pub(crate) fn grouped_all(&self, binding: &FieldBinding) -> Result<Vec<&'a [Avp]>> {
        self.avps
            .iter()
            .filter(|avp| avp.code == binding.avp)
            .map(|avp| avp.value.as_grouped().ok_or_else(|| mismatch(binding, &avp.value)))
            .collect()
    }
}

fn mismatch(binding: &FieldBinding, value: &AvpValue) -> FegwError {
    FegwError::InvalidAvpValue {
        avp: binding.wire_name(),
        reason: format!(
            "expected {:?}, got {:?}",
            binding.avp.data_type(),
            value.data_type()
        ),
    }
}

pub(crate) fn put(binding: &FieldBinding, value: AvpValue) -> Avp {
    Avp::new(binding.avp, value)
}

pub(crate) fn put_grouped(binding: &FieldBinding, children: Vec<Avp>) -> Avp {
    Avp::new(binding.avp, AvpValue::Grouped(children))
}

impl ToAvps for GrantedServiceUnit {
    fn to_avps(&self) -> Vec<Avp> {
        [
            (&Self::TOTAL_OCTETS, self.total_octets),
            (&Self::INPUT_OCTETS, self.input_octets),
            (&Self::OUTPUT_OCTETS, self.output_octets),
        ]
        .into_iter()
        .filter_map(|(binding, octets)| octets.map(|v| put(binding, AvpValue::Unsigned64(v))))
        .collect()
    }
}

impl FromAvps for GrantedServiceUnit {
    fn from_avps(avps: &[Avp]) -> Result<Self> {
        let reader = AvpReader::new(avps);
        Ok(Self {
            total_octets: reader.opt_u64(&Self::TOTAL_OCTETS)?,
            input_octets: reader.opt_u64(&Self::INPUT_OCTETS)?,
            output_octets: reader.opt_u64(&Self::OUTPUT_OCTETS)?,
        })
    }
}

impl ToAvps for FinalUnitIndication {
    fn to_avps(&self) -> Vec<Avp> {
        vec![put(&Self::ACTION, AvpValue::Enumerated(self.action.as_i32()))]
    }
}

impl FromAvps for FinalUnitIndication {
    fn from_avps(avps: &[Avp]) -> Result<Self> {
        let action = AvpReader::new(avps).enumerated(&Self::ACTION)?;
        Ok(Self {
            action: FinalUnitAction::try_from(action)?,
        })
    }
}

impl ToAvps for MsccDiameterMessage {
    fn to_avps(&self) -> Vec<Avp> {
        let mut avps = Vec::new();
        if let Some(result_code) = self.result_code {
            avps.push(put(&Self::RESULT_CODE, AvpValue::Unsigned32(result_code)));
        }
        if let Some(gsu) = &self.granted_service_unit {
            avps.push(put_grouped(&Self::GRANTED_SERVICE_UNIT, gsu.to_avps()));
        }
        if let Some(validity_time) = self.validity_time {
            avps.push(put(&Self::VALIDITY_TIME, AvpValue::Unsigned32(validity_time)));
        }
        if let Some(fui) = &self.final_unit_indication {
            avps.push(put_grouped(&Self::FINAL_UNIT_INDICATION, fui.to_avps()));
        }
        if let Some(rating_group) = self.rating_group {
            avps.push(put(&Self::RATING_GROUP, AvpValue::Unsigned32(rating_group)));
        }
        avps
    }
}

impl FromAvps for MsccDiameterMessage {
    fn from_avps(avps: &[Avp]) -> Result<Self> {
        let reader = AvpReader::new(avps);
        Ok(Self {
            result_code: reader.opt_u32(&Self::RESULT_CODE)?,
            granted_service_unit: reader
                .opt_grouped(&Self::GRANTED_SERVICE_UNIT)?
                .map(GrantedServiceUnit::from_avps)
                .transpose()?,
            validity_time: reader.opt_u32(&Self::VALIDITY_TIME)?,
            final_unit_indication: reader
                .opt_grouped(&Self::FINAL_UNIT_INDICATION)?
                .map(FinalUnitIndication::from_avps)
                .transpose()?,
            rating_group: reader.opt_u32(&Self::RATING_GROUP)?,
        })
    }
}

impl ToAvps for CcaDiameterMessage {
    fn to_avps(&self) -> Vec<Avp> {
        let mut avps = vec![
            put(&Self::SESSION_ID, AvpValue::Utf8String(self.session_id.clone())),
            put(&Self::REQUEST_NUMBER, AvpValue::Unsigned32(self.request_number)),
            put(&Self::RESULT_CODE, AvpValue::Unsigned32(self.result_code)),
            put(&Self::REQUEST_TYPE, AvpValue::Enumerated(self.request_type.as_i32())),
        ];
        avps.extend(
            self.credit_control
                .iter()
                .map(|mscc| put_grouped(&Self::CREDIT_CONTROL, mscc.to_avps())),
        );
        avps
    }
}

impl FromAvps for CcaDiameterMessage {
    fn from_avps(avps: &[Avp]) -> Result<Self> {
        let reader = AvpReader::new(avps);
        let session_id = reader.string(&Self::SESSION_ID)?;
        let credit_control = reader
            .grouped_all(&Self::CREDIT_CONTROL)?
            .into_iter()
            .map(MsccDiameterMessage::from_avps)
            .collect::<Result<Vec<_>>>()?;

        let msg = Self {
            request_number: reader.u32(&Self::REQUEST_NUMBER)?,
            result_code: reader.u32(&Self::RESULT_CODE)?,
            request_type: CreditRequestType::try_from(reader.enumerated(&Self::REQUEST_TYPE)?)?,
            credit_control,
            session_id,
        };
        debug!(
            session_id = %msg.session_id,
            request_number = msg.request_number,
            result_code = msg.result_code,
            credits = msg.credit_control.len(),
            "Decoded {}",
            Self::MESSAGE
        );
        Ok(msg)
    }
}

impl ToAvps for ReAuthRequest {
    fn to_avps(&self) -> Vec<Avp> {
        let mut avps = vec![put(
            &Self::SESSION_ID,
            AvpValue::Utf8String(self.session_id.clone()),
        )];
        if let Some(rating_group) = self.rating_group {
            avps.push(put(&Self::RATING_GROUP, AvpValue::Unsigned32(rating_group)));
        }
        avps
    }
}

impl FromAvps for ReAuthRequest {
    fn from_avps(avps: &[Avp]) -> Result<Self> {
        let reader = AvpReader::new(avps);
        let msg = Self {
            session_id: reader.string(&Self::SESSION_ID)?,
            rating_group: reader.opt_u32(&Self::RATING_GROUP)?,
        };
        debug!(
            session_id = %msg.session_id,
            rating_group = ?msg.rating_group,
            "Decoded {}",
            Self::MESSAGE
        );
        Ok(msg)
    }
}

impl ToAvps for ReAuthAnswer {
    fn to_avps(&self) -> Vec<Avp> {
        trace!(session_id = %self.session_id, result_code = self.result_code, "Encoding RAA");
        vec![
            put(&Self::SESSION_ID, AvpValue::Utf8String(self.session_id.clone())),
            put(&Self::RESULT_CODE, AvpValue::Unsigned32(self.result_code)),
        ]
    }
}

impl FromAvps for ReAuthAnswer {
    fn from_avps(avps: &[Avp]) -> Result<Self> {
        let reader = AvpReader::new(avps);
        Ok(Self {
            session_id: reader.string(&Self::SESSION_ID)?,
            result_code: reader.u32(&Self::RESULT_CODE)?,
        })
    }
}
