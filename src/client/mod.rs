//! HBnB API client
//!
//! [`PlacesApi`] is the seam consumers depend on; [`PlacesClient`] is the
//! HTTP implementation. A [`MockPlacesClient`](mock::MockPlacesClient) is
//! available in unit tests.

use async_trait::async_trait;

use crate::error::Result;

pub mod http;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use http::PlacesClient;
pub use models::{Credentials, LoginRequest, NewPlace, Place};

/// Operations exposed by the HBnB listings API.
///
/// Failure policy differs per operation and is deliberate: `login` and the
/// place mutations surface errors for the caller to display, while
/// `list_places` degrades to an empty list so listing UIs stay non-fatal.
/// An empty result may therefore mean "no places" or "listing failed".
#[async_trait]
pub trait PlacesApi: Send + Sync {
    /// Authenticate with email and password.
    ///
    /// On success the returned access token is persisted to the credential
    /// store, so subsequent calls are authenticated.
    async fn login(&self, email: &str, password: &str) -> Result<Credentials>;

    /// Fetch all places. Never fails; failures are logged and yield an
    /// empty list.
    async fn list_places(&self) -> Vec<Place>;

    /// Fetch a single place by ID
    async fn get_place(&self, place_id: &str) -> Result<Place>;

    /// Create a new place
    async fn create_place(&self, place: &NewPlace) -> Result<Place>;

    /// Update an existing place
    async fn update_place(&self, place_id: &str, place: &NewPlace) -> Result<Place>;
}
