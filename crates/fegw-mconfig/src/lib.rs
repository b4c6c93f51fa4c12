//! Controller configuration -> gateway managed configuration (mconfig).
//!
//! The controller keeps a richer, operator-authored schema; gateways only
//! receive the reduced mconfig records produced here.

// Controller-authored schema
pub mod controller;

// Gateway-facing schema
pub mod mconfig;

// Projections
pub mod convert;

// YAML / JSON documents
pub mod document;

pub use convert::{
    project, project_diam_client_config, project_diam_server_config,
    project_subscription_profile, ToMconfig,
};
pub use document::MconfigError;
