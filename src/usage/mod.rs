//! Service usage walk
//!
//! Builds the service -> plan -> instance -> space -> organization tree and
//! hands it to the output layer.

mod cache;
mod commands;
mod models;
mod walker;

pub use cache::OrganizationCache;
pub use commands::{report_service_use, run_service_use_command};
pub use models::{Hierarchy, Organization, Service, ServiceInstance, ServicePlan, Space};
pub use walker::ServiceWalker;
