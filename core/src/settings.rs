//! Host-owned settings shape and the credential borrowed per conversion.
//!
//! The core never persists or caches these values; the host loads them from
//! its own settings store and passes a [`Credential`] into each call.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Secret used to authenticate with the cloud backend.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential {
    api_key: Option<String>,
}

impl Credential {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
        }
    }

    pub fn empty() -> Self {
        Self { api_key: None }
    }

    /// The key, or `None` when it is absent or blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Short SHA-256 prefix that identifies the key in diagnostics.
    pub fn fingerprint(&self) -> Option<String> {
        self.api_key().map(|key| {
            let digest = Sha256::digest(key.as_bytes());
            format!("{:x}", digest).chars().take(8).collect()
        })
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}

impl From<Option<String>> for Credential {
    fn from(api_key: Option<String>) -> Self {
        Self { api_key }
    }
}

/// Persisted plugin settings as the host stores them.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct LangMathSettings {
    #[serde(default)]
    pub api_key: Option<String>,
}

impl LangMathSettings {
    /// Apply a key typed into the settings form; blank input clears it.
    pub fn update_api_key(&mut self, value: &str) {
        let trimmed = value.trim();
        self.api_key = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    pub fn credential(&self) -> Credential {
        Credential::from(self.api_key.clone())
    }
}

impl fmt::Debug for LangMathSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LangMathSettings")
            .field("api_key", &self.credential())
            .finish()
    }
}
