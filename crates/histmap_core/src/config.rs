//! API endpoint configuration.
//!
//! # Responsibility
//! - Hold the configurable API base URL and build per-entity endpoint URLs.
//! - Resolve the base URL from the environment before falling back to the
//!   local development default.
//!
//! # Invariants
//! - The stored base URL never ends with a trailing slash.
//! - Endpoint paths match the server routes exactly, including the
//!   trailing slash on detail routes.

use crate::model::event::EventId;
use crate::model::person::PersonId;
use crate::model::place::PlaceId;
use std::env;

/// Default base URL for a locally running API.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api/v1";

/// Environment variable overriding the API base URL before startup.
pub const API_BASE_ENV_VAR: &str = "HISTMAP_API_BASE";

/// Resolved API endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a config from an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into().trim().to_string();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Resolves the base URL from `HISTMAP_API_BASE`, defaulting to the
    /// local loopback API when unset or blank.
    pub fn from_env() -> Self {
        match env::var(API_BASE_ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => Self::new(value),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Collection endpoint returning all places as GeoJSON features.
    pub fn places_url(&self) -> String {
        format!("{}/places.geojson", self.base_url)
    }

    pub fn place_details_url(&self, id: PlaceId) -> String {
        format!("{}/places/{id}/details/", self.base_url)
    }

    pub fn event_details_url(&self, id: EventId) -> String {
        format!("{}/events/{id}/details/", self.base_url)
    }

    pub fn person_details_url(&self, id: PersonId) -> String {
        format!("{}/persons/{id}/details/", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiConfig, DEFAULT_API_BASE};

    #[test]
    fn default_points_at_local_api() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url(), DEFAULT_API_BASE);
    }

    #[test]
    fn trailing_slashes_are_normalized() {
        let config = ApiConfig::new("https://gazetteer.example.org/api/v1//");
        assert_eq!(config.base_url(), "https://gazetteer.example.org/api/v1");
    }

    #[test]
    fn endpoint_urls_match_server_routes() {
        let config = ApiConfig::new("http://127.0.0.1:8000/api/v1");
        assert_eq!(
            config.places_url(),
            "http://127.0.0.1:8000/api/v1/places.geojson"
        );
        assert_eq!(
            config.place_details_url(12),
            "http://127.0.0.1:8000/api/v1/places/12/details/"
        );
        assert_eq!(
            config.event_details_url(7),
            "http://127.0.0.1:8000/api/v1/events/7/details/"
        );
        assert_eq!(
            config.person_details_url(3),
            "http://127.0.0.1:8000/api/v1/persons/3/details/"
        );
    }
}
