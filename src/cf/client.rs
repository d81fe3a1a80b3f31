//! Cloud Foundry HTTP client for API interactions

use futures::stream::{self, StreamExt};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::cf::traits::PaginatedResponse;
use crate::config::api;
use crate::error::{CfError, Result};

/// Single-resource envelope returned by `GET <locator>`
#[derive(serde::Deserialize, Debug)]
struct EntityEnvelope<T> {
    entity: T,
}

/// Cloud Foundry API client
pub struct CfClient {
    client: Client,
    token: String,
    endpoint: String,
}

impl CfClient {
    /// Create a new client with optimized connection settings
    pub fn new(token: String, endpoint: String, skip_ssl_validation: bool) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .danger_accept_invalid_certs(skip_ssl_validation)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token: strip_bearer(&token).to_string(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// API endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Turn a locator into an absolute URL
    ///
    /// The platform hands out locators relative to the API endpoint
    /// (`/v2/spaces/<guid>`); absolute URLs pass through untouched.
    pub(crate) fn url_for(&self, locator: &str) -> String {
        if locator.starts_with("http://") || locator.starts_with("https://") {
            return locator.to_string();
        }
        if locator.starts_with('/') {
            format!("{}{}", self.endpoint, locator)
        } else {
            format!("{}/{}", self.endpoint, locator)
        }
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("Authorization", format!("bearer {}", self.token))
            .header("Accept", "application/json")
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(CfError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch a single resource and return its entity
    ///
    /// # Arguments
    /// * `locator` - Resource locator (e.g., "/v2/spaces/<guid>")
    /// * `resource_label` - Human-readable label for error messages
    pub async fn fetch_entity<T>(&self, locator: &str, resource_label: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url_for(locator);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(&url).send().await?;
        let envelope: EntityEnvelope<T> =
            self.parse_api_response(response, resource_label).await?;
        Ok(envelope.entity)
    }

    /// Fetch all pages from a paginated list endpoint
    ///
    /// Page 1 is fetched first to learn `total_pages`; the remaining pages
    /// are fetched in parallel (bounded by `MAX_CONCURRENT_PAGE_REQUESTS`)
    /// and reassembled in page order.
    ///
    /// # Type Parameters
    /// * `T` - The item type (e.g., ServiceRecord)
    /// * `R` - The response type that implements PaginatedResponse<T>
    pub async fn fetch_all_pages<T, R>(&self, locator: &str, error_context: &str) -> Result<Vec<T>>
    where
        T: Send,
        R: DeserializeOwned + PaginatedResponse<T> + Send,
    {
        let base = self.url_for(locator);
        let separator = if base.contains('?') { "&" } else { "?" };
        let page_url = |page: u32| {
            format!(
                "{}{}results-per-page={}&page={}",
                base,
                separator,
                api::DEFAULT_PAGE_SIZE,
                page
            )
        };

        let first_page_url = page_url(1);
        debug!("Fetching page 1 from: {}", first_page_url);

        let response = self.get(&first_page_url).send().await?;
        let first_resp: R = self.parse_api_response(response, error_context).await?;
        let total_pages = first_resp.total_pages();
        let mut all_items = first_resp.into_data();

        let total_pages = match total_pages {
            Some(pages) if pages > 1 => pages,
            _ => return Ok(all_items),
        };

        debug!(
            "Fetching {} remaining pages of {} (max {} concurrent)",
            total_pages - 1,
            error_context,
            api::MAX_CONCURRENT_PAGE_REQUESTS
        );

        let page_futures = (2..=total_pages)
            .map(|page_num| self.fetch_single_page::<T, R>(page_url(page_num), page_num, error_context));

        let results: Vec<Result<(u32, Vec<T>)>> = stream::iter(page_futures)
            .buffer_unordered(api::MAX_CONCURRENT_PAGE_REQUESTS)
            .collect()
            .await;

        let mut page_results: Vec<(u32, Vec<T>)> = Vec::with_capacity(results.len());
        for result in results {
            page_results.push(result?);
        }

        // Completion order is arbitrary; restore page order
        page_results.sort_by_key(|(page_num, _)| *page_num);

        for (_, items) in page_results {
            all_items.extend(items);
        }

        debug!(
            "Fetched {} total items for {}",
            all_items.len(),
            error_context
        );
        Ok(all_items)
    }

    /// Fetch a single page (helper for parallel pagination)
    async fn fetch_single_page<T, R>(
        &self,
        url: String,
        page_num: u32,
        error_context: &str,
    ) -> Result<(u32, Vec<T>)>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        debug!("Fetching page {} from: {}", page_num, url);

        let response = self.get(&url).send().await?;

        let page_context = format!("{} (page {})", error_context, page_num);
        let resp: R = self.parse_api_response(response, &page_context).await?;
        let items = resp.into_data();

        debug!("Page {} returned {} items", page_num, items.len());
        Ok((page_num, items))
    }
}

/// Strip the `bearer ` prefix the CF CLI stores with its tokens
pub(crate) fn strip_bearer(token: &str) -> &str {
    let trimmed = token.trim();
    match trimmed.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("bearer ") => trimmed[7..].trim_start(),
        _ => trimmed,
    }
}

#[cfg(test)]
impl CfClient {
    /// Create a test client against a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new("test-token".to_string(), base_url.to_string(), false)
    }
}
