//! Service hierarchy walk
//!
//! Resolves services -> plans -> instances -> space -> organization, top
//! down. Siblings at each level are resolved with at most `concurrency`
//! futures in flight and collected in API order. The first failure at any
//! depth fails the whole walk; no partial hierarchy is returned.

use futures::stream::{self, StreamExt, TryStreamExt};
use log::debug;

use crate::cf::CfApi;
use crate::error::{CfError, Result};

use super::cache::OrganizationCache;
use super::models::{Hierarchy, Organization, Service, ServiceInstance, ServicePlan, Space};

/// Walks the service hierarchy of one API session
pub struct ServiceWalker<'a, A: CfApi + ?Sized> {
    api: &'a A,
    cache: OrganizationCache,
    concurrency: usize,
}

impl<'a, A: CfApi + ?Sized> ServiceWalker<'a, A> {
    /// Create a walker with a fresh organization cache
    ///
    /// A `concurrency` of 1 resolves strictly depth-first, one call at a time.
    pub fn new(api: &'a A, concurrency: usize) -> Self {
        Self {
            api,
            cache: OrganizationCache::new(),
            concurrency: concurrency.max(1),
        }
    }

    /// Organization cache shared by every walk of this walker
    pub fn cache(&self) -> &OrganizationCache {
        &self.cache
    }

    /// Resolve the full hierarchy
    pub async fn walk(&self) -> Result<Hierarchy> {
        let services = self.resolve_services().await?;
        debug!(
            "Walk complete: {} services, {} organizations cached",
            services.len(),
            self.cache.len()
        );
        Ok(Hierarchy::new(services))
    }

    async fn resolve_services(&self) -> Result<Vec<Service>> {
        let records = self.api.list_services().await?;
        debug!("Found {} services", records.len());

        stream::iter(records.iter().map(|record| async move {
            let plans = self.resolve_plans(&record.plans_locator).await?;
            Ok::<_, CfError>(Service {
                label: record.label.clone(),
                plans,
            })
        }))
        .buffered(self.concurrency)
        .try_collect()
        .await
    }

    async fn resolve_plans(&self, plans_locator: &str) -> Result<Vec<ServicePlan>> {
        let records = self.api.list_plans(plans_locator).await?;
        debug!("Found {} plans at {}", records.len(), plans_locator);

        stream::iter(records.iter().map(|record| async move {
            let service_instances = self.resolve_instances(&record.instances_locator).await?;
            Ok::<_, CfError>(ServicePlan {
                name: record.name.clone(),
                service_instances,
            })
        }))
        .buffered(self.concurrency)
        .try_collect()
        .await
    }

    async fn resolve_instances(&self, instances_locator: &str) -> Result<Vec<ServiceInstance>> {
        let records = self.api.list_instances(instances_locator).await?;
        debug!("Found {} instances at {}", records.len(), instances_locator);

        stream::iter(records.iter().map(|record| async move {
            let space = self.resolve_space(&record.space_locator).await?;
            Ok::<_, CfError>(ServiceInstance {
                name: record.name.clone(),
                space,
            })
        }))
        .buffered(self.concurrency)
        .try_collect()
        .await
    }

    async fn resolve_space(&self, space_locator: &str) -> Result<Space> {
        let record = self.api.get_space(space_locator).await?;
        let organization = self.resolve_organization(&record.organization_locator).await?;
        Ok(Space {
            name: record.name,
            organization,
        })
    }

    async fn resolve_organization(&self, organization_locator: &str) -> Result<Organization> {
        self.cache.resolve(self.api, organization_locator).await
    }
}
