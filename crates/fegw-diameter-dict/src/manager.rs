use crate::data_type::{Avp, DictError};
use crate::standard::StandardAvpCode;

/// Dictionary manager for AVP name resolution and validation
pub struct DictionaryManager {}

impl DictionaryManager {
    /// Create new dictionary manager
    pub fn new() -> Self {
        Self {}
    }

    /// Resolve a wire attribute name to its dictionary entry
    pub fn resolve(&self, name: &str) -> Result<StandardAvpCode, DictError> {
        StandardAvpCode::from_name(name).ok_or_else(|| DictError::UnknownAvpName(name.to_string()))
    }

    /// Validate a list of AVPs against the dictionary
    pub fn validate(&self, avps: &[Avp]) -> Result<(), DictError> {
        avps.iter().try_for_each(Avp::check)
    }
}

impl Default for DictionaryManager {
    fn default() -> Self {
        Self::new()
    }
}
