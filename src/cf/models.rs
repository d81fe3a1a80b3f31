//! Raw Cloud Foundry v2 records
//!
//! These mirror the `entity` part of API responses and carry the locators
//! that link one level of the service hierarchy to the next.

use serde::Deserialize;

use crate::cf::traits::PaginatedResponse;

/// Resource metadata common to every v2 record
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Metadata {
    #[serde(default)]
    pub guid: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// A `{ metadata, entity }` pair from a list response
#[derive(Deserialize, Debug, Clone)]
pub struct Resource<E> {
    #[serde(default)]
    pub metadata: Metadata,
    pub entity: E,
}

/// Paginated list response
#[derive(Deserialize, Debug)]
pub struct ListResponse<E> {
    #[serde(default)]
    pub total_results: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(default = "Vec::new")]
    pub resources: Vec<Resource<E>>,
}

impl<E> PaginatedResponse<E> for ListResponse<E> {
    fn into_data(self) -> Vec<E> {
        self.resources.into_iter().map(|r| r.entity).collect()
    }

    fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }
}

/// Service offering
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    pub label: String,
    #[serde(rename = "service_plans_url")]
    pub plans_locator: String,
}

/// Service plan
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlanRecord {
    pub name: String,
    #[serde(rename = "service_instances_url")]
    pub instances_locator: String,
}

/// Provisioned service instance
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InstanceRecord {
    pub name: String,
    #[serde(rename = "space_url")]
    pub space_locator: String,
}

/// Space owning an instance
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SpaceRecord {
    pub name: String,
    #[serde(rename = "organization_url")]
    pub organization_locator: String,
}

/// Organization owning a space
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OrganizationRecord {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_list_parsing() {
        let response: ListResponse<ServiceRecord> = serde_json::from_value(serde_json::json!({
            "total_results": 1,
            "total_pages": 1,
            "prev_url": null,
            "next_url": null,
            "resources": [{
                "metadata": { "guid": "svc-1", "url": "/v2/services/svc-1" },
                "entity": {
                    "label": "p-mysql",
                    "active": true,
                    "service_plans_url": "/v2/services/svc-1/service_plans"
                }
            }]
        }))
        .unwrap();

        assert_eq!(response.total_pages(), Some(1));
        let services = response.into_data();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].label, "p-mysql");
        assert_eq!(services[0].plans_locator, "/v2/services/svc-1/service_plans");
    }

    #[test]
    fn test_plan_parsing() {
        let plan: PlanRecord = serde_json::from_value(serde_json::json!({
            "name": "100mb",
            "free": true,
            "service_instances_url": "/v2/service_plans/p1/service_instances"
        }))
        .unwrap();
        assert_eq!(plan.name, "100mb");
        assert_eq!(plan.instances_locator, "/v2/service_plans/p1/service_instances");
    }

    #[test]
    fn test_instance_parsing() {
        let instance: InstanceRecord = serde_json::from_value(serde_json::json!({
            "name": "orders-db",
            "space_url": "/v2/spaces/s1"
        }))
        .unwrap();
        assert_eq!(instance.space_locator, "/v2/spaces/s1");
    }

    #[test]
    fn test_space_parsing() {
        let space: SpaceRecord = serde_json::from_value(serde_json::json!({
            "name": "dev",
            "organization_guid": "o1",
            "organization_url": "/v2/organizations/o1"
        }))
        .unwrap();
        assert_eq!(space.name, "dev");
        assert_eq!(space.organization_locator, "/v2/organizations/o1");
    }

    #[test]
    fn test_list_without_pagination_fields() {
        let response: ListResponse<OrganizationRecord> =
            serde_json::from_value(serde_json::json!({
                "resources": [{ "entity": { "name": "acme" } }]
            }))
            .unwrap();
        assert!(response.total_pages().is_none());
        assert_eq!(response.into_data()[0].name, "acme");
    }

    #[test]
    fn test_missing_locator_is_rejected() {
        let result: Result<ServiceRecord, _> =
            serde_json::from_value(serde_json::json!({ "label": "p-redis" }));
        assert!(result.is_err());
    }
}
