// Error types module
pub mod error;

// Diameter Result-Code values
pub mod result_code;

// Re-export commonly used types
pub use error::{ErrorSeverity, FegwError, Result};
pub use result_code::ResultClass;
