//! Gy (Diameter Credit-Control) message model.
//!
//! Plain value types exchanged between the session charging client and the
//! protocol codec, the AVP binding tables the codec marshals them with, and
//! the checks a client runs on an answer before acting on it.

// Credit-Control application vocabulary (RFC 4006)
pub mod credit_control;

// Gy enumerations and messages
pub mod definitions;

// Field -> AVP binding tables
pub mod mapping;

// Logical AVP list encoding
pub mod avp;
pub mod request;

// Answer checks
pub mod check;

pub use avp::{FromAvps, ToAvps};
pub use check::{check_correlation, check_result};
pub use credit_control::{CreditRequestType, GrantedServiceUnit};
pub use definitions::*;
pub use mapping::{FieldBinding, Presence, WireMapping};
