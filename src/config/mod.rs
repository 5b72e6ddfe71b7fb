//! Client configuration for the HBnB API

use serde::{Deserialize, Serialize};

/// API endpoint configuration.
///
/// Injected into [`PlacesClient`](crate::client::PlacesClient) at
/// construction so callers can point the client at any deployment. The
/// defaults match a local development server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin plus path prefix, e.g. `http://127.0.0.1:5000/api/v1`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path to the places collection, relative to `base_url`
    #[serde(default = "default_places_path")]
    pub places_path: String,

    /// Path to the login endpoint, relative to `base_url`
    #[serde(default = "default_auth_path")]
    pub auth_path: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000/api/v1".to_string()
}

fn default_places_path() -> String {
    "/places".to_string()
}

fn default_auth_path() -> String {
    "/auth/login".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            places_path: default_places_path(),
            auth_path: default_auth_path(),
        }
    }
}

impl ApiConfig {
    /// Create a configuration for the given base URL with default paths.
    ///
    /// A trailing slash on the base URL is stripped so joined URLs stay
    /// canonical.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Full URL of the places collection
    pub fn places_url(&self) -> String {
        format!("{}{}", self.base_url, self.places_path)
    }

    /// Full URL of a single place resource
    pub fn place_url(&self, place_id: &str) -> String {
        format!("{}{}/{}", self.base_url, self.places_path, place_id)
    }

    /// Full URL of the login endpoint
    pub fn auth_url(&self) -> String {
        format!("{}{}", self.base_url, self.auth_path)
    }
}
