//! Result-Code values (AVP 268) used on the Gy interface, RFC 6733 and RFC 4006.

pub const DIAMETER_SUCCESS: u32 = 2001;
pub const DIAMETER_LIMITED_SUCCESS: u32 = 2002;

pub const DIAMETER_UNABLE_TO_DELIVER: u32 = 3002;
pub const DIAMETER_TOO_BUSY: u32 = 3004;

pub const DIAMETER_END_USER_SERVICE_DENIED: u32 = 4010;
pub const DIAMETER_CREDIT_CONTROL_NOT_APPLICABLE: u32 = 4011;
pub const DIAMETER_CREDIT_LIMIT_REACHED: u32 = 4012;

pub const DIAMETER_AVP_UNSUPPORTED: u32 = 5001;
pub const DIAMETER_UNKNOWN_SESSION_ID: u32 = 5002;
pub const DIAMETER_INVALID_AVP_VALUE: u32 = 5004;
pub const DIAMETER_MISSING_AVP: u32 = 5005;
pub const DIAMETER_UNABLE_TO_COMPLY: u32 = 5012;
pub const DIAMETER_USER_UNKNOWN: u32 = 5030;
pub const DIAMETER_RATING_FAILED: u32 = 5031;

/// Result-Code class, taken from the thousands digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultClass {
    Informational,
    Success,
    ProtocolError,
    TransientFailure,
    PermanentFailure,
    Unrecognized,
}

impl ResultClass {
    pub fn of(result_code: u32) -> Self {
        match result_code / 1000 {
            1 => Self::Informational,
            2 => Self::Success,
            3 => Self::ProtocolError,
            4 => Self::TransientFailure,
            5 => Self::PermanentFailure,
            _ => Self::Unrecognized,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}
