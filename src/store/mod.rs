//! Credential storage for the bearer token
//!
//! The client never holds the token itself; it re-reads it from a
//! [`CredentialStore`] on every request, so every consumer sharing a store
//! shares one identity. The trait is object-safe and used as
//! `Arc<dyn CredentialStore>` to keep generics out of the client type.

use crate::error::StoreError;

mod cookie;
mod file;
mod memory;

pub use cookie::{Cookie, CookieStore};
pub use file::FileStore;
pub use memory::MemoryStore;

/// Name of the cookie record holding the bearer token
pub const TOKEN_COOKIE: &str = "token";

/// Abstraction over where the bearer token lives.
///
/// Implementations must be `Send + Sync`; the client may be shared across
/// tasks and each request reads the store independently.
pub trait CredentialStore: Send + Sync {
    /// Persist the token, replacing any previous value
    fn set_token(&self, token: &str) -> Result<(), StoreError>;

    /// Read the current token, `None` if no token has been stored
    fn token(&self) -> Result<Option<String>, StoreError>;
}
