//! HBnB API data models

use serde::{Deserialize, Serialize};

/// A listing record as returned by the places endpoints.
///
/// Every display attribute is optional; the server may omit any of them and
/// consumers are expected to substitute placeholders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Place {
    /// Place ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Host display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Price per night
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Amenity names or IDs attached to the place
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
}

/// Payload for creating or updating a place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlace {
    /// Place title (required by the server, max 100 characters)
    pub title: String,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Price per night, non-negative
    pub price: f64,

    /// Latitude, -90 to 90
    pub latitude: f64,

    /// Longitude, -180 to 180
    pub longitude: f64,

    /// ID of the owning user
    pub owner_id: String,

    /// Amenity IDs to attach
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Bearer token to attach to subsequent requests
    pub access_token: String,
}

/// Login request body
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// User email
    pub email: String,

    /// User password
    pub password: String,
}

/// Error payload shape used by the server.
///
/// The API reports failures under either a `message` or an `error` key
/// depending on the endpoint; `message` wins when both are present.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    message: Option<String>,

    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    /// Extract the server-provided failure message, if any
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}
