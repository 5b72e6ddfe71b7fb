//! HTTP implementation of the HBnB API client

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as HttpClient, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::PlacesApi;
use super::models::{Credentials, ErrorBody, LoginRequest, NewPlace, Place};
use crate::config::ApiConfig;
use crate::error::{ApiError, Error, Result};
use crate::store::CredentialStore;

/// Authenticated client for the HBnB listings API.
///
/// The client is stateless per call: the bearer token is re-read from the
/// [`CredentialStore`] on every request, so all clients sharing a store share
/// one identity and a login from any of them is visible to the rest.
pub struct PlacesClient {
    http: HttpClient,
    config: ApiConfig,
    store: Arc<dyn CredentialStore>,
}

impl PlacesClient {
    /// Create a client against the given endpoints and credential store
    pub fn new(config: ApiConfig, store: Arc<dyn CredentialStore>) -> Result<Self> {
        let http = HttpClient::builder()
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            config,
            store,
        })
    }

    /// Persist a token, replacing any previous value
    pub fn set_token(&self, token: &str) -> Result<()> {
        Ok(self.store.set_token(token)?)
    }

    /// Read the current token from the store
    pub fn token(&self) -> Result<Option<String>> {
        Ok(self.store.token()?)
    }

    /// Whether a token is currently stored.
    ///
    /// No freshness or signature validation happens client-side; a stale
    /// token still counts as authenticated until the server rejects it.
    pub fn is_authenticated(&self) -> bool {
        match self.store.token() {
            Ok(token) => token.is_some(),
            Err(err) => {
                log::warn!("Credential store read failed: {}", err);
                false
            }
        }
    }

    /// Issue an authenticated request and parse the JSON response.
    ///
    /// Headers are assembled in fixed precedence: JSON content type first,
    /// then caller extras, then `Authorization: Bearer <token>` when a token
    /// is stored. Auth is applied last so callers cannot override it.
    ///
    /// Failures are logged before being returned.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<Value>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<T> {
        match self.request_inner(method, url, body, extra_headers).await {
            Ok(data) => Ok(data),
            Err(err) => {
                log::error!("API error ({}): {}", url, err);
                Err(err)
            }
        }
    }

    async fn request_inner<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<Value>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<T> {
        let token = self.store.token()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(extra) = extra_headers {
            headers.extend(extra);
        }
        if let Some(ref token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ApiError::Transport(format!("Invalid token: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        let mut request = self.http.request(method, url).headers(headers);
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(&body)?);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();

        // The body is parsed as JSON unconditionally; error responses carry
        // their message in the payload.
        let text = response.text().await.map_err(ApiError::from)?;
        let payload: Value = serde_json::from_str(&text)
            .map_err(|e| ApiError::Transport(format!("Non-JSON response: {}", e)))?;

        if !status.is_success() {
            let message = serde_json::from_value::<ErrorBody>(payload)
                .ok()
                .and_then(ErrorBody::into_message)
                .unwrap_or_else(|| "API request failed".to_string());
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        serde_json::from_value(payload)
            .map_err(|e| ApiError::Transport(format!("Unexpected response shape: {}", e)).into())
    }
}

#[async_trait]
impl PlacesApi for PlacesClient {
    async fn login(&self, email: &str, password: &str) -> Result<Credentials> {
        let body = serde_json::to_value(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })?;

        let credentials: Credentials = self
            .request(Method::POST, &self.config.auth_url(), Some(body), None)
            .await
            .map_err(|err| match err {
                Error::Api(ApiError::RequestFailed { message, .. }) => {
                    ApiError::AuthFailed(message).into()
                }
                other => other,
            })?;

        self.store.set_token(&credentials.access_token)?;
        log::debug!("Login succeeded; token persisted");
        Ok(credentials)
    }

    async fn list_places(&self) -> Vec<Place> {
        match self
            .request(Method::GET, &self.config.places_url(), None, None)
            .await
        {
            Ok(places) => places,
            Err(err) => {
                // Listing is non-fatal: degrade to an empty list so the
                // caller's display path keeps working.
                log::warn!("Failed to fetch places: {}", err);
                Vec::new()
            }
        }
    }

    async fn get_place(&self, place_id: &str) -> Result<Place> {
        self.request(Method::GET, &self.config.place_url(place_id), None, None)
            .await
    }

    async fn create_place(&self, place: &NewPlace) -> Result<Place> {
        let body = serde_json::to_value(place)?;
        self.request(Method::POST, &self.config.places_url(), Some(body), None)
            .await
    }

    async fn update_place(&self, place_id: &str, place: &NewPlace) -> Result<Place> {
        let body = serde_json::to_value(place)?;
        self.request(Method::PUT, &self.config.place_url(place_id), Some(body), None)
            .await
    }
}
