//! Cloud Foundry API access
//!
//! This module provides the HTTP client, the raw v2 records, and the
//! session (endpoint and token) resolution.

mod api;
mod client;
mod config_file;
mod credentials;
mod endpoint;
pub mod models;
pub mod traits;

pub use client::CfClient;
pub use config_file::CfConfigFile;
pub use credentials::TokenResolver;
pub use endpoint::{normalize_url, Endpoint, EndpointResolver};
pub use models::{InstanceRecord, OrganizationRecord, PlanRecord, ServiceRecord, SpaceRecord};
pub use traits::{CfApi, PaginatedResponse};
