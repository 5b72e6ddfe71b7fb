//! Mock HBnB API client for testing
//!
//! Provides a mock implementation of [`PlacesApi`] for unit testing without
//! making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::PlacesApi;
use super::models::{Credentials, NewPlace, Place};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
/// Error injection is one-shot: the configured error is consumed by the
/// next call, mirroring a single failed request.
pub struct MockPlacesClient {
    /// Places to return from list_places and get_place
    places: Arc<Mutex<Vec<Place>>>,
    /// Credentials to return from login
    credentials: Arc<Mutex<Option<Credentials>>>,
    /// Error to return (if any), consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Creation payloads captured for test assertions
    created: Arc<Mutex<Vec<NewPlace>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub list_places: usize,
    pub get_place: usize,
    pub create_place: usize,
    pub update_place: usize,
}

impl Default for MockPlacesClient {
    fn default() -> Self {
        Self {
            places: Arc::new(Mutex::new(Vec::new())),
            credentials: Arc::new(Mutex::new(None)),
            error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            created: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockPlacesClient {
    /// Create a new mock client with default (empty) responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure places to return from list_places and get_place
    pub async fn with_places(self, places: Vec<Place>) -> Self {
        *self.places.lock().await = places;
        self
    }

    /// Configure credentials to return from login
    pub async fn with_credentials(self, credentials: Credentials) -> Self {
        *self.credentials.lock().await = Some(credentials);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Creation payloads received so far
    pub async fn created_places(&self) -> Vec<NewPlace> {
        self.created.lock().await.clone()
    }

    /// Check if there's a pending error and consume it
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl PlacesApi for MockPlacesClient {
    async fn login(&self, email: &str, _password: &str) -> Result<Credentials> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.login += 1;
        drop(counts);

        let credentials = self.credentials.lock().await;
        Ok(credentials.clone().unwrap_or_else(|| Credentials {
            access_token: format!("mock-token-{}", email),
        }))
    }

    async fn list_places(&self) -> Vec<Place> {
        let mut counts = self.call_count.lock().await;
        counts.list_places += 1;
        drop(counts);

        // Same degrade policy as the real client: a failure yields an
        // empty list instead of an error.
        if self.check_error().await.is_err() {
            return Vec::new();
        }

        self.places.lock().await.clone()
    }

    async fn get_place(&self, place_id: &str) -> Result<Place> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.get_place += 1;
        drop(counts);

        let places = self.places.lock().await;
        places
            .iter()
            .find(|p| p.id.as_deref() == Some(place_id))
            .cloned()
            .ok_or_else(|| {
                ApiError::RequestFailed {
                    status: 404,
                    message: "Place not found".to_string(),
                }
                .into()
            })
    }

    async fn create_place(&self, place: &NewPlace) -> Result<Place> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.create_place += 1;
        drop(counts);

        self.created.lock().await.push(place.clone());

        let mut places = self.places.lock().await;
        let created = Place {
            id: Some(format!("mock-place-{}", places.len() + 1)),
            name: Some(place.title.clone()),
            host: Some(place.owner_id.clone()),
            price: Some(place.price),
            description: place.description.clone(),
            amenities: place.amenities.clone(),
        };
        places.push(created.clone());

        Ok(created)
    }

    async fn update_place(&self, place_id: &str, place: &NewPlace) -> Result<Place> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.update_place += 1;
        drop(counts);

        let mut places = self.places.lock().await;
        let existing = places
            .iter_mut()
            .find(|p| p.id.as_deref() == Some(place_id))
            .ok_or(ApiError::RequestFailed {
                status: 404,
                message: "Place not found".to_string(),
            })?;

        existing.name = Some(place.title.clone());
        existing.price = Some(place.price);
        existing.description = place.description.clone();
        existing.amenities = place.amenities.clone();

        Ok(existing.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_place(id: &str, name: &str) -> Place {
        Place {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            ..Place::default()
        }
    }

    fn sample_new_place(title: &str) -> NewPlace {
        NewPlace {
            title: title.to_string(),
            description: None,
            price: 80.0,
            latitude: 48.85,
            longitude: 2.35,
            owner_id: "u-1".to_string(),
            amenities: vec![],
        }
    }

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockPlacesClient::new();
        assert!(mock.list_places().await.is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_with_places_preserves_order() {
        let mock = MockPlacesClient::new()
            .with_places(vec![sample_place("p-1", "A"), sample_place("p-2", "B")])
            .await;

        let places = mock.list_places().await;
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].name.as_deref(), Some("A"));
        assert_eq!(places[1].name.as_deref(), Some("B"));
    }

    #[tokio::test]
    async fn test_mock_client_list_degrades_on_error() {
        let mock = MockPlacesClient::new()
            .with_places(vec![sample_place("p-1", "A")])
            .await
            .with_error(ApiError::Transport("boom".to_string()))
            .await;

        // Error is consumed and swallowed into an empty list
        assert!(mock.list_places().await.is_empty());

        // Next call succeeds
        assert_eq!(mock.list_places().await.len(), 1);
    }

    #[tokio::test]
    async fn test_mock_client_create_propagates_error() {
        let mock = MockPlacesClient::new()
            .with_error(ApiError::RequestFailed {
                status: 400,
                message: "price must be a positive float".to_string(),
            })
            .await;

        let result = mock.create_place(&sample_new_place("Loft")).await;
        assert!(result.is_err());
        assert!(mock.created_places().await.is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_create_then_get() {
        let mock = MockPlacesClient::new();

        let created = mock.create_place(&sample_new_place("Loft")).await.unwrap();
        let id = created.id.clone().unwrap();

        let fetched = mock.get_place(&id).await.unwrap();
        assert_eq!(fetched.name.as_deref(), Some("Loft"));

        let counts = mock.call_counts().await;
        assert_eq!(counts.create_place, 1);
        assert_eq!(counts.get_place, 1);
    }

    #[tokio::test]
    async fn test_mock_client_get_unknown_place() {
        let mock = MockPlacesClient::new();

        let result = mock.get_place("nope").await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_mock_client_update_place() {
        let mock = MockPlacesClient::new()
            .with_places(vec![sample_place("p-1", "Old")])
            .await;

        let updated = mock
            .update_place("p-1", &sample_new_place("New"))
            .await
            .unwrap();
        assert_eq!(updated.name.as_deref(), Some("New"));
    }

    #[tokio::test]
    async fn test_mock_client_login_default_token() {
        let mock = MockPlacesClient::new();

        let credentials = mock.login("user@example.com", "secret").await.unwrap();
        assert!(credentials.access_token.starts_with("mock-token-"));

        let counts = mock.call_counts().await;
        assert_eq!(counts.login, 1);
    }
}
