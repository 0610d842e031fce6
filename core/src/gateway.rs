//! Resource Gateway
//!
//! Network retrieval of the named resource collections backing the page.
//! The backend is a generic REST resource store: each resource lives at a
//! fixed path under one base URL and returns JSON — an array for the three
//! collection resources, an object for the profile record.
//!
//! The gateway surfaces exactly one of two failure kinds per operation
//! (see [`GatewayError`]) and never retries: a single failed attempt goes
//! straight back to the caller, and the orchestrator decides how to
//! degrade.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::AppConfig;
use crate::error::GatewayError;
use crate::model::{Category, Place, Profile};
use crate::search;

/// Retrieval interface for the page's named resources.
///
/// Implement this trait to substitute the HTTP store with a test double.
#[async_trait]
pub trait ResourceGateway: Send + Sync {
    /// Fetch all lodging categories.
    async fn get_categories(&self) -> Result<Vec<Category>, GatewayError>;

    /// Fetch all popular destinations.
    async fn get_destinations(&self) -> Result<Vec<Place>, GatewayError>;

    /// Fetch all recommended places.
    async fn get_recommended(&self) -> Result<Vec<Place>, GatewayError>;

    /// Fetch the user profile record.
    async fn get_profile(&self) -> Result<Profile, GatewayError>;

    /// Cross-collection search by name.
    ///
    /// Always performs fresh fetches of both collections (nothing is cached
    /// client-side), concatenates destinations first then recommended
    /// places preserving each collection's order, and filters to names
    /// containing the case-folded query.
    async fn search_places(&self, query: &str) -> Result<Vec<Place>, GatewayError> {
        let destinations = self.get_destinations().await?;
        let recommended = self.get_recommended().await?;
        Ok(search::filter_by_name(
            search::merge(destinations, recommended),
            query,
        ))
    }
}

/// HTTP gateway against the REST resource store.
#[derive(Clone)]
pub struct HttpGateway {
    /// Base URL of the resource store, without a trailing slash
    base_url: String,
    /// HTTP client
    client: reqwest::Client,
}

impl HttpGateway {
    /// Default request timeout applied to every operation.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a gateway for a base URL with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Self::DEFAULT_TIMEOUT)
    }

    /// Create a gateway with an explicit request timeout.
    ///
    /// A timed-out request surfaces as [`GatewayError::Network`].
    #[must_use]
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Create a gateway from application configuration.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_timeout(
            config.base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Full URL for a named resource.
    fn url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource)
    }

    /// Fetch one resource and decode its JSON body.
    async fn fetch_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T, GatewayError> {
        let url = self.url(resource);
        debug!(%url, "fetching resource");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(GatewayError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Http {
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(GatewayError::Network)
    }
}

#[async_trait]
impl ResourceGateway for HttpGateway {
    async fn get_categories(&self) -> Result<Vec<Category>, GatewayError> {
        self.fetch_json("categories").await
    }

    async fn get_destinations(&self) -> Result<Vec<Place>, GatewayError> {
        self.fetch_json("destinations").await
    }

    async fn get_recommended(&self) -> Result<Vec<Place>, GatewayError> {
        self.fetch_json("recommended").await
    }

    async fn get_profile(&self) -> Result<Profile, GatewayError> {
        self.fetch_json("profile").await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_resource_urls_join_base_path() {
        let gateway = HttpGateway::new("http://localhost:3000/api");
        assert_eq!(gateway.url("categories"), "http://localhost:3000/api/categories");
        assert_eq!(gateway.url("profile"), "http://localhost:3000/api/profile");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let gateway = HttpGateway::new("http://localhost:3000/api/");
        assert_eq!(gateway.url("destinations"), "http://localhost:3000/api/destinations");
    }
}
