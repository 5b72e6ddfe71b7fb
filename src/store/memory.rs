//! In-memory credential store

use std::sync::RwLock;

use crate::error::StoreError;

use super::CredentialStore;

/// Credential store backed by a plain in-memory slot.
///
/// Useful in tests and in embedders that manage persistence themselves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: RwLock<Option<String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl CredentialStore for MemoryStore {
    fn set_token(&self, token: &str) -> Result<(), StoreError> {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(token.to_string());
        Ok(())
    }

    fn token(&self) -> Result<Option<String>, StoreError> {
        let slot = self.token.read().unwrap_or_else(|e| e.into_inner());
        Ok(slot.clone())
    }
}
