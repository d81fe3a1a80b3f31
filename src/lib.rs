//! cf-service-use - Cloud Foundry service usage report
//!
//! Lists every service offering visible to the caller, the plans under each
//! offering, the provisioned instances under each plan, and the space and
//! organization that own each instance.
//!
//! # Features
//!
//! - Full service -> plan -> instance -> space -> org walk
//! - Organization lookups memoized per run (one fetch per org)
//! - Bounded concurrent fan-out, results kept in API order
//! - Automatic pagination handling
//! - Multiple output formats (report, table, CSV, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! # Use the target and token from `cf login`
//! cf-service-use
//!
//! # Explicit endpoint and token
//! cf-service-use --api https://api.sys.example.com --token "$(cf oauth-token)"
//!
//! # One row per instance
//! cf-service-use -o table
//! ```

pub mod cf;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod ui;
pub mod usage;

pub use cf::{CfApi, CfClient, EndpointResolver, TokenResolver};
pub use cli::{Cli, OutputFormat};
pub use error::{CfError, Result};
pub use output::output_hierarchy;
pub use usage::{
    report_service_use, run_service_use_command, Hierarchy, Organization, OrganizationCache,
    Service, ServiceInstance, ServicePlan, ServiceWalker, Space,
};
