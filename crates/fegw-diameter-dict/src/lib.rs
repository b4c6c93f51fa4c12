// Diameter dictionary module
pub mod standard;
pub mod data_type;
pub mod manager;

// Re-export commonly used types
pub use standard::{StandardAvpCode, VENDOR_3GPP};
pub use data_type::{Avp, AvpDataType, AvpValue, DictError};
pub use manager::DictionaryManager;
