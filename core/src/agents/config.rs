use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::providers::{ProviderSeed, GOOGLE_SEED, OLLAMA_SEED};

/// The two interchangeable text-generation services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    Cloud,
    Local,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cloud => f.write_str("cloud"),
            Self::Local => f.write_str("local"),
        }
    }
}

/// How a backend expects to be authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthRequirement {
    None,
    ApiKeyHeader { header: String },
}

/// Connection settings injected into a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub id: String,
    pub display_name: String,
    pub base_url: String,
    pub model: String,
    pub auth: AuthRequirement,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub top_p: Option<f64>,
    #[serde(default)]
    pub trim_response: bool,
    /// `None` leaves the transport default in place.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default = "default_true")]
    pub use_system_proxy: bool,
}

fn default_true() -> bool {
    true
}

impl BackendConfig {
    pub fn cloud() -> Self {
        Self::from_seed(&GOOGLE_SEED)
    }

    pub fn local() -> Self {
        Self::from_seed(&OLLAMA_SEED)
    }

    pub fn for_backend(backend: Backend) -> Self {
        match backend {
            Backend::Cloud => Self::cloud(),
            Backend::Local => Self::local(),
        }
    }

    pub fn from_seed(seed: &ProviderSeed) -> Self {
        let local = seed.kind == "local";
        Self {
            id: seed.id.to_string(),
            display_name: seed.display.to_string(),
            base_url: seed.base_url.to_string(),
            model: seed.default_model.to_string(),
            auth: match seed.api_key_header {
                Some(header) => AuthRequirement::ApiKeyHeader {
                    header: header.to_string(),
                },
                None => AuthRequirement::None,
            },
            temperature: seed.temperature,
            top_p: seed.top_p,
            trim_response: local,
            request_timeout_secs: None,
            use_system_proxy: !local,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn without_system_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Join `path` onto the base URL, tolerating a trailing slash.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}
