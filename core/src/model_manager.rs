//! Entry point the editor host calls with a selection and a backend choice.
//!
//! The manager owns one provider per backend and routes each request to the
//! backend the user picked. There is no fallback between backends and no
//! retry; a failed call is terminal and its error is returned to the host.

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use log::debug;

use crate::agents::{AiProvider, Backend, BackendConfig, CloudProvider, LocalProvider};
use crate::errors::{ConversionResult, LangMathError};
use crate::settings::Credential;

/// One conversion invocation, discarded after use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    source_text: String,
    backend: Backend,
}

impl ConversionRequest {
    /// Reject empty or whitespace-only selections up front.
    pub fn new(source_text: impl Into<String>, backend: Backend) -> Result<Self, LangMathError> {
        let source_text = source_text.into();
        if source_text.trim().is_empty() {
            return Err(LangMathError::EmptySelection);
        }
        Ok(Self {
            source_text,
            backend,
        })
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }
}

/// Whether a successful result has anything to put in place of the selection.
pub fn is_insertable(replacement: &str) -> bool {
    !replacement.is_empty()
}

/// Routes conversions to the cloud or local provider.
#[derive(Clone)]
pub struct ModelManager {
    cloud: Arc<dyn AiProvider>,
    local: Arc<dyn AiProvider>,
}

impl ModelManager {
    /// Build a manager with the built-in Gemini and Ollama configurations.
    pub fn new() -> Result<Arc<Self>> {
        Self::with_configs(BackendConfig::cloud(), BackendConfig::local())
    }

    pub fn with_configs(cloud: BackendConfig, local: BackendConfig) -> Result<Arc<Self>> {
        let cloud = CloudProvider::with_config(cloud).context("cloud provider")?;
        let local = LocalProvider::with_config(local).context("local provider")?;
        Ok(Self::with_providers(Arc::new(cloud), Arc::new(local)))
    }

    pub fn with_providers(cloud: Arc<dyn AiProvider>, local: Arc<dyn AiProvider>) -> Arc<Self> {
        Arc::new(Self { cloud, local })
    }

    pub fn provider(&self, backend: Backend) -> &dyn AiProvider {
        match backend {
            Backend::Cloud => self.cloud.as_ref(),
            Backend::Local => self.local.as_ref(),
        }
    }

    /// Run one conversion. The credential is only borrowed for this call.
    pub async fn convert(
        &self,
        request: &ConversionRequest,
        credential: Option<&Credential>,
    ) -> ConversionResult {
        debug!(
            "routing {} character selection to {} backend",
            request.source_text.chars().count(),
            request.backend
        );
        self.provider(request.backend)
            .convert(&request.source_text, credential)
            .await
    }

    /// Blocking helper that wraps [`convert`](Self::convert) for synchronous hosts.
    ///
    /// Returns an error instead of blocking when called from inside an async runtime.
    pub fn convert_blocking(
        &self,
        request: &ConversionRequest,
        credential: Option<&Credential>,
    ) -> Result<ConversionResult> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(anyhow!("convert_blocking called from within an async runtime"));
        }
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to start conversion runtime")?;
        Ok(runtime.block_on(self.convert(request, credential)))
    }
}
