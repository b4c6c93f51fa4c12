use fegw_core::{FegwError, Result};
use serde::{Deserialize, Serialize};

/// CC-Request-Type values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum CreditRequestType {
    Initial = 1,
    Update = 2,
    Terminate = 3,
}

impl CreditRequestType {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for CreditRequestType {
    type Error = FegwError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            1 => Ok(Self::Initial),
            2 => Ok(Self::Update),
            3 => Ok(Self::Terminate),
            _ => Err(FegwError::UnknownEnumValue {
                avp: "CC-Request-Type",
                value: value.into(),
            }),
        }
    }
}

/// Granted-Service-Unit volume quota. Each counter is only present when the
/// OCS granted that kind of unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantedServiceUnit {
    pub total_octets: Option<u64>,
    pub input_octets: Option<u64>,
    pub output_octets: Option<u64>,
}

impl GrantedServiceUnit {
    /// No volume granted in any direction
    pub fn is_empty(&self) -> bool {
        self.total_octets.is_none() && self.input_octets.is_none() && self.output_octets.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_type_values() {
        assert_eq!(CreditRequestType::Initial.as_i32(), 1);
        assert_eq!(CreditRequestType::Update.as_i32(), 2);
        assert_eq!(CreditRequestType::Terminate.as_i32(), 3);
    }

    #[test]
    fn test_request_type_from_wire() {
        assert_eq!(CreditRequestType::try_from(2).unwrap(), CreditRequestType::Update);
        assert_eq!(
            CreditRequestType::try_from(4),
            Err(FegwError::UnknownEnumValue { avp: "CC-Request-Type", value: 4 })
        );
        assert!(CreditRequestType::try_from(0).is_err());
    }

    #[test]
    fn test_granted_service_unit_empty() {
        assert!(GrantedServiceUnit::default().is_empty());
        let gsu = GrantedServiceUnit {
            total_octets: Some(0),
            ..Default::default()
        };
        assert!(!gsu.is_empty());
    }
}
