//! Per-walk organization cache
//!
//! Many spaces share one organization, so organization lookups are
//! memoized by locator. Each locator has at most one fetch in flight;
//! concurrent callers for the same locator wait on it. Only successful
//! fetches are kept: after a failure the next caller fetches again.

use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::OnceCell;

use crate::cf::CfApi;
use crate::error::{CfError, Result};

use super::models::Organization;

/// Organization locator -> resolved organization
#[derive(Default)]
pub struct OrganizationCache {
    entries: Mutex<HashMap<String, Arc<OnceCell<Organization>>>>,
}

impl OrganizationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve an organization, fetching it through `api` on first use
    pub async fn resolve<A>(&self, api: &A, locator: &str) -> Result<Organization>
    where
        A: CfApi + ?Sized,
    {
        let cell = {
            let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            entries.entry(locator.to_string()).or_default().clone()
        };

        if let Some(org) = cell.get() {
            debug!("Organization cache hit for {}", locator);
            return Ok(org.clone());
        }

        let org = cell
            .get_or_try_init(|| async {
                debug!("Organization cache miss for {}, fetching", locator);
                let record = api.get_organization(locator).await?;
                Ok::<_, CfError>(Organization { name: record.name })
            })
            .await?;
        Ok(org.clone())
    }

    /// Number of organizations resolved so far
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|cell| cell.initialized())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cf::{InstanceRecord, OrganizationRecord, PlanRecord, ServiceRecord, SpaceRecord};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Serves organizations only; fails the first `failures` fetches
    struct OrgApi {
        calls: AtomicUsize,
        failures: usize,
        delay: Duration,
    }

    impl OrgApi {
        fn new(failures: usize) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                failures,
                delay: Duration::ZERO,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CfApi for OrgApi {
        async fn list_services(&self) -> Result<Vec<ServiceRecord>> {
            unreachable!()
        }

        async fn list_plans(&self, _: &str) -> Result<Vec<PlanRecord>> {
            unreachable!()
        }

        async fn list_instances(&self, _: &str) -> Result<Vec<InstanceRecord>> {
            unreachable!()
        }

        async fn get_space(&self, _: &str) -> Result<SpaceRecord> {
            unreachable!()
        }

        async fn get_organization(&self, locator: &str) -> Result<OrganizationRecord> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            if call < self.failures {
                return Err(CfError::Api {
                    status: 503,
                    message: format!("Failed to fetch organization '{}'", locator),
                });
            }
            Ok(OrganizationRecord {
                name: locator.rsplit('/').next().unwrap_or_default().to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_second_lookup_is_served_from_cache() {
        let api = OrgApi::new(0);
        let cache = OrganizationCache::new();

        let first = cache.resolve(&api, "/v2/organizations/acme").await.unwrap();
        let second = cache.resolve(&api, "/v2/organizations/acme").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.name, "acme");
        assert_eq!(api.calls(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_distinct_locators_fetch_separately() {
        let api = OrgApi::new(0);
        let cache = OrganizationCache::new();

        cache.resolve(&api, "/v2/organizations/a").await.unwrap();
        cache.resolve(&api, "/v2/organizations/b").await.unwrap();
        cache.resolve(&api, "/v2/organizations/a").await.unwrap();

        assert_eq!(api.calls(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let api = OrgApi::new(1);
        let cache = OrganizationCache::new();

        let err = cache
            .resolve(&api, "/v2/organizations/acme")
            .await
            .unwrap_err();
        assert!(matches!(err, CfError::Api { status: 503, .. }));
        assert!(cache.is_empty());

        // Retried rather than answered with an empty organization
        let org = cache.resolve(&api, "/v2/organizations/acme").await.unwrap();
        assert_eq!(org.name, "acme");
        assert_eq!(api.calls(), 2);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_lookups_share_one_fetch() {
        let api = Arc::new(OrgApi {
            calls: AtomicUsize::new(0),
            failures: 0,
            delay: Duration::from_millis(50),
        });
        let cache = Arc::new(OrganizationCache::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let api = Arc::clone(&api);
                let cache = Arc::clone(&cache);
                tokio::spawn(async move {
                    cache
                        .resolve(&*api, "/v2/organizations/shared")
                        .await
                })
            })
            .collect();

        for handle in handles {
            let org = handle.await.unwrap().unwrap();
            assert_eq!(org.name, "shared");
        }
        assert_eq!(api.calls(), 1);
    }
}
