use thiserror::Error;

use crate::standard::StandardAvpCode;

/// AVP data type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvpDataType {
    OctetString,
    Utf8String,
    DiameterIdentity,
    Unsigned32,
    Unsigned64,
    Integer32,
    Integer64,
    Grouped,
    Enumerated,
    Address,
}

/// Logical AVP value, before binary encoding or after decoding
#[derive(Debug, Clone, PartialEq)]
pub enum AvpValue {
    OctetString(Vec<u8>),
    Utf8String(String),
    DiameterIdentity(String),
    Unsigned32(u32),
    Unsigned64(u64),
    Integer32(i32),
    Integer64(i64),
    Grouped(Vec<Avp>),
    Enumerated(i32),
    Address(std::net::IpAddr),
}

/// A dictionary AVP paired with its value
#[derive(Debug, Clone, PartialEq)]
pub struct Avp {
    pub code: StandardAvpCode,
    pub value: AvpValue,
}

/// Dictionary errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DictError {
    #[error("AVP {name} expects {expected:?}, got {found:?}")]
    TypeMismatch {
        name: &'static str,
        expected: AvpDataType,
        found: AvpDataType,
    },

    #[error("Unknown AVP name: {0}")]
    UnknownAvpName(String),
}

impl AvpValue {
    /// Data type carried by this value
    pub fn data_type(&self) -> AvpDataType {
        match self {
            Self::OctetString(_) => AvpDataType::OctetString,
            Self::Utf8String(_) => AvpDataType::Utf8String,
            Self::DiameterIdentity(_) => AvpDataType::DiameterIdentity,
            Self::Unsigned32(_) => AvpDataType::Unsigned32,
            Self::Unsigned64(_) => AvpDataType::Unsigned64,
            Self::Integer32(_) => AvpDataType::Integer32,
            Self::Integer64(_) => AvpDataType::Integer64,
            Self::Grouped(_) => AvpDataType::Grouped,
            Self::Enumerated(_) => AvpDataType::Enumerated,
            Self::Address(_) => AvpDataType::Address,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Unsigned32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Unsigned64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_enumerated(&self) -> Option<i32> {
        match self {
            Self::Enumerated(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Utf8String(s) | Self::DiameterIdentity(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::OctetString(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_grouped(&self) -> Option<&[Avp]> {
        match self {
            Self::Grouped(avps) => Some(avps),
            _ => None,
        }
    }
}

impl Avp {
    pub fn new(code: StandardAvpCode, value: AvpValue) -> Self {
        Self { code, value }
    }

    /// Check the value type against the dictionary, recursing into grouped AVPs
    pub fn check(&self) -> Result<(), DictError> {
        let expected = self.code.data_type();
        let found = self.value.data_type();
        if expected != found {
            return Err(DictError::TypeMismatch {
                name: self.code.name(),
                expected,
                found,
            });
        }
        if let AvpValue::Grouped(children) = &self.value {
            children.iter().try_for_each(Avp::check)?;
        }
        Ok(())
    }
}
