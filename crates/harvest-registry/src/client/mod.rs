//! HTTP client for the registry's browse pages

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use harvest_core::error::HarvestError;

use crate::RegistryResult;

/// HTTP client for the registry website's depended-upon listing
#[derive(Debug, Clone)]
pub struct BrowseClient {
    /// Underlying HTTP client with connection pooling
    client: Client,
    /// Base registry URL, e.g. `https://www.npmjs.com`
    base_url: String,
}

impl BrowseClient {
    /// Create a new client for the given registry base URL
    pub fn new(base_url: impl Into<String>) -> RegistryResult<Self> {
        let client = ClientBuilder::new()
            // Connection pooling configuration
            .pool_max_idle_per_host(8)
            .pool_idle_timeout(Duration::from_secs(90))
            // Request timeout
            .timeout(Duration::from_secs(30))
            // Enable gzip compression
            .gzip(true)
            // User agent
            .user_agent(concat!("harvest/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HarvestError::registry("failed to create HTTP client", e))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch one page of the "most depended upon" listing.
    ///
    /// `offset` is a multiple of the listing page size. Returns the raw HTML
    /// body; any non-success status or transport failure is a registry error.
    pub async fn fetch_depended_page(&self, offset: usize) -> RegistryResult<String> {
        let url = format!("{}/browse/depended", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("offset", offset)])
            .send()
            .await
            .map_err(|e| {
                HarvestError::registry(
                    format!("failed to fetch listing page at offset {}", offset),
                    e,
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::registry_status(format!(
                "listing page at offset {} returned status {}",
                offset, status
            )));
        }

        response.text().await.map_err(|e| {
            HarvestError::registry(
                format!("failed to read listing page at offset {}", offset),
                e,
            )
        })
    }
}

#[cfg(test)]
mod tests;
