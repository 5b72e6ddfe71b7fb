//! Cookie-record credential store
//!
//! Emulates browser cookie semantics for environments that persist the token
//! as a cookie: records are keyed by name with overwrite semantics, and the
//! token record carries `path=/; SameSite=Strict; Secure` attributes.

use std::sync::RwLock;

use crate::error::StoreError;

use super::{CredentialStore, TOKEN_COOKIE};

/// A single parsed cookie record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
    /// `Path` attribute, if present
    pub path: Option<String>,
    /// `SameSite` attribute, if present
    pub same_site: Option<String>,
    /// Whether the `Secure` attribute was set
    pub secure: bool,
}

impl Cookie {
    /// Parse a cookie record string like `token=abc; path=/; SameSite=Strict; Secure`.
    ///
    /// The first segment must be a `name=value` pair; attribute names are
    /// matched case-insensitively and unknown attributes are ignored.
    pub fn parse(record: &str) -> Result<Self, StoreError> {
        let mut segments = record.split(';').map(str::trim);

        let pair = segments
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| StoreError::MalformedCookie(record.to_string()))?;
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| StoreError::MalformedCookie(record.to_string()))?;
        if name.is_empty() {
            return Err(StoreError::MalformedCookie(record.to_string()));
        }

        let mut cookie = Cookie {
            name: name.to_string(),
            value: value.to_string(),
            path: None,
            same_site: None,
            secure: false,
        };

        for segment in segments {
            match segment.split_once('=') {
                Some((attr, val)) if attr.eq_ignore_ascii_case("path") => {
                    cookie.path = Some(val.to_string());
                }
                Some((attr, val)) if attr.eq_ignore_ascii_case("samesite") => {
                    cookie.same_site = Some(val.to_string());
                }
                None if segment.eq_ignore_ascii_case("secure") => {
                    cookie.secure = true;
                }
                _ => {} // unknown attribute
            }
        }

        Ok(cookie)
    }

    /// Render the record back to its attribute-string form
    pub fn to_record(&self) -> String {
        let mut record = format!("{}={}", self.name, self.value);
        if let Some(ref path) = self.path {
            record.push_str(&format!("; path={}", path));
        }
        if let Some(ref same_site) = self.same_site {
            record.push_str(&format!("; SameSite={}", same_site));
        }
        if self.secure {
            record.push_str("; Secure");
        }
        record
    }
}

/// In-process cookie jar implementing [`CredentialStore`].
///
/// The token is written as `token=<value>; path=/; SameSite=Strict; Secure`
/// and read back by name, matching the record the original web client set.
#[derive(Debug, Default)]
pub struct CookieStore {
    cookies: RwLock<Vec<Cookie>>,
}

impl CookieStore {
    /// Create an empty cookie store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cookie from its record string, replacing any cookie with the
    /// same name
    pub fn set_cookie(&self, record: &str) -> Result<(), StoreError> {
        let cookie = Cookie::parse(record)?;
        let mut cookies = self.cookies.write().unwrap_or_else(|e| e.into_inner());
        cookies.retain(|c| c.name != cookie.name);
        cookies.push(cookie);
        Ok(())
    }

    /// Look up a cookie value by name
    pub fn get_cookie(&self, name: &str) -> Option<String> {
        let cookies = self.cookies.read().unwrap_or_else(|e| e.into_inner());
        cookies
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value.clone())
    }

    /// Snapshot of all stored cookie records
    pub fn records(&self) -> Vec<Cookie> {
        let cookies = self.cookies.read().unwrap_or_else(|e| e.into_inner());
        cookies.clone()
    }
}

impl CredentialStore for CookieStore {
    fn set_token(&self, token: &str) -> Result<(), StoreError> {
        self.set_cookie(&format!(
            "{}={}; path=/; SameSite=Strict; Secure",
            TOKEN_COOKIE, token
        ))
    }

    fn token(&self) -> Result<Option<String>, StoreError> {
        Ok(self.get_cookie(TOKEN_COOKIE))
    }
}
