//! File-backed credential store

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

use super::CredentialStore;

/// On-disk credential format
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

/// Credential store persisting the token as YAML on disk.
///
/// The default location is `~/.hbnb/credentials.yaml`. The file is written
/// with mode 600 on Unix systems since the token grants API access.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store at the default path under the user's home directory
    pub fn new() -> Result<Self, StoreError> {
        let home = dirs::home_dir().ok_or(StoreError::NoHomeDirectory)?;
        Ok(Self::at(home.join(".hbnb").join("credentials.yaml")))
    }

    /// Create a store at a specific path
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path the token is persisted to
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn load(&self) -> Result<StoredCredentials, StoreError> {
        if !self.path.exists() {
            return Ok(StoredCredentials::default());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    fn save(&self, credentials: &StoredCredentials) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(credentials).map_err(|e| StoreError::SaveError(e.to_string()))?;
        std::fs::write(&self.path, contents)?;

        // The token is a live credential; keep the file private
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }
}

impl CredentialStore for FileStore {
    fn set_token(&self, token: &str) -> Result<(), StoreError> {
        let mut credentials = self.load()?;
        credentials.token = Some(token.to_string());
        self.save(&credentials)
    }

    fn token(&self) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.token)
    }
}
