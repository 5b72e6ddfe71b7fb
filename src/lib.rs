//! Authenticated API-access layer for the HBnB listings service
//!
//! This crate covers token storage, request dispatch with bearer-token
//! attachment, and error normalization for the HBnB REST API. Rendering and
//! page wiring are a consumer concern; the client hands back plain data
//! records.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use hbnb_client::{ApiConfig, MemoryStore, PlacesApi, PlacesClient};
//!
//! # async fn example() -> hbnb_client::Result<()> {
//! let client = PlacesClient::new(
//!     ApiConfig::new("https://hbnb.example.com/api/v1"),
//!     Arc::new(MemoryStore::new()),
//! )?;
//!
//! client.login("user@example.com", "secret").await?;
//! let places = client.list_places().await;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod store;

pub use client::{Credentials, NewPlace, Place, PlacesApi, PlacesClient};
pub use config::ApiConfig;
pub use error::{ApiError, Error, Result, StoreError};
pub use store::{Cookie, CookieStore, CredentialStore, FileStore, MemoryStore};
