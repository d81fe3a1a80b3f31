//! `CfApi` over the Cloud Foundry v2 REST API

use async_trait::async_trait;

use crate::cf::models::{
    InstanceRecord, ListResponse, OrganizationRecord, PlanRecord, ServiceRecord, SpaceRecord,
};
use crate::cf::traits::CfApi;
use crate::cf::CfClient;
use crate::config::api;
use crate::error::Result;

#[async_trait]
impl CfApi for CfClient {
    async fn list_services(&self) -> Result<Vec<ServiceRecord>> {
        self.fetch_all_pages::<ServiceRecord, ListResponse<ServiceRecord>>(
            api::SERVICES,
            "services",
        )
        .await
    }

    async fn list_plans(&self, plans_locator: &str) -> Result<Vec<PlanRecord>> {
        self.fetch_all_pages::<PlanRecord, ListResponse<PlanRecord>>(
            plans_locator,
            &format!("service plans at '{}'", plans_locator),
        )
        .await
    }

    async fn list_instances(&self, instances_locator: &str) -> Result<Vec<InstanceRecord>> {
        self.fetch_all_pages::<InstanceRecord, ListResponse<InstanceRecord>>(
            instances_locator,
            &format!("service instances at '{}'", instances_locator),
        )
        .await
    }

    async fn get_space(&self, space_locator: &str) -> Result<SpaceRecord> {
        self.fetch_entity(space_locator, &format!("space '{}'", space_locator))
            .await
    }

    async fn get_organization(&self, organization_locator: &str) -> Result<OrganizationRecord> {
        self.fetch_entity(
            organization_locator,
            &format!("organization '{}'", organization_locator),
        )
        .await
    }
}
