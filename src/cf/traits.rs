//! Common traits for Cloud Foundry resources

use async_trait::async_trait;

use crate::cf::models::{
    InstanceRecord, OrganizationRecord, PlanRecord, ServiceRecord, SpaceRecord,
};
use crate::error::Result;

/// Trait for API responses that contain paginated data
///
/// Implement this trait for any list response to enable use with
/// `CfClient::fetch_all_pages()`.
pub trait PaginatedResponse<T> {
    /// Consume self and return the data items
    fn into_data(self) -> Vec<T>;
    /// Total number of pages, if the response carries it
    fn total_pages(&self) -> Option<u32>;
}

/// Access to the five lookups the service walk needs
///
/// `CfClient` implements this over HTTP; tests supply canned fixtures.
/// Locators are opaque and are passed through exactly as the previous
/// level returned them.
#[async_trait]
pub trait CfApi: Send + Sync {
    /// List every service offering visible to the caller
    async fn list_services(&self) -> Result<Vec<ServiceRecord>>;

    /// List the plans behind a service's plan-collection locator
    async fn list_plans(&self, plans_locator: &str) -> Result<Vec<PlanRecord>>;

    /// List the instances behind a plan's instance-collection locator
    async fn list_instances(&self, instances_locator: &str) -> Result<Vec<InstanceRecord>>;

    /// Fetch a single space
    async fn get_space(&self, space_locator: &str) -> Result<SpaceRecord>;

    /// Fetch a single organization
    async fn get_organization(&self, organization_locator: &str) -> Result<OrganizationRecord>;
}
