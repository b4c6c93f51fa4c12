use thiserror::Error;

use crate::result_code::{
    DIAMETER_INVALID_AVP_VALUE, DIAMETER_MISSING_AVP, DIAMETER_UNKNOWN_SESSION_ID,
};

/// Errors raised by the charging codec and client around the Gy model.
///
/// The model and the config projection never produce these themselves;
/// they surface while mapping AVPs back into messages or while checking an
/// answer against its outstanding request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FegwError {
    // ========================================
    // Decode Errors
    // ========================================
    #[error("Malformed message: {0}")]
    Decode(String),

    #[error("Missing required AVP: {0}")]
    MissingAvp(&'static str),

    #[error("Invalid value for AVP {avp}: {reason}")]
    InvalidAvpValue { avp: &'static str, reason: String },

    #[error("Unknown value {value} for enumerated AVP {avp}")]
    UnknownEnumValue { avp: &'static str, value: i64 },

    // ========================================
    // Protocol Errors
    // ========================================
    #[error("OCS answered with Result-Code {result_code}")]
    Protocol { result_code: u32 },

    // ========================================
    // Correlation Errors
    // ========================================
    #[error(
        "Answer {session_id}/{request_number} does not match outstanding request \
         {expected_session_id}/{expected_request_number}"
    )]
    Correlation {
        expected_session_id: String,
        expected_request_number: u32,
        session_id: String,
        request_number: u32,
    },
}

impl FegwError {
    /// Convert error to the Result-Code a peer should see
    pub fn to_result_code(&self) -> u32 {
        match self {
            Self::Decode(_) => DIAMETER_INVALID_AVP_VALUE,
            Self::MissingAvp(_) => DIAMETER_MISSING_AVP,
            Self::InvalidAvpValue { .. } | Self::UnknownEnumValue { .. } => {
                DIAMETER_INVALID_AVP_VALUE
            }
            Self::Protocol { result_code } => *result_code,
            Self::Correlation { .. } => DIAMETER_UNKNOWN_SESSION_ID,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Decode(_) | Self::MissingAvp(_) => ErrorSeverity::Warning,
            Self::InvalidAvpValue { .. } | Self::UnknownEnumValue { .. } => ErrorSeverity::Warning,
            Self::Protocol { .. } | Self::Correlation { .. } => ErrorSeverity::Error,
        }
    }

    /// Transient OCS failures (4xxx) may be retried by the charging client
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Protocol { result_code } if (4000..5000).contains(result_code))
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Result type alias for gateway charging operations
pub type Result<T> = std::result::Result<T, FegwError>;
