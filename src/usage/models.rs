//! Resolved service hierarchy
//!
//! Every node is fully resolved when constructed and never changes after.

use serde::Serialize;

/// Organization owning a space
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub name: String,
}

/// Space owning a service instance
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Space {
    pub name: String,
    pub organization: Organization,
}

/// Provisioned service instance
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ServiceInstance {
    pub name: String,
    pub space: Space,
}

/// Service plan with its instances, in API order
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ServicePlan {
    pub name: String,
    pub service_instances: Vec<ServiceInstance>,
}

/// Service offering with its plans, in API order
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub label: String,
    pub plans: Vec<ServicePlan>,
}

/// Root of a walk: every service visible to the caller
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Hierarchy {
    pub services: Vec<Service>,
}

impl Hierarchy {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Number of plans across all services
    pub fn plan_count(&self) -> usize {
        self.services.iter().map(|s| s.plans.len()).sum()
    }

    /// Number of service instances across all plans
    pub fn instance_count(&self) -> usize {
        self.services
            .iter()
            .flat_map(|s| &s.plans)
            .map(|p| p.service_instances.len())
            .sum()
    }
}
