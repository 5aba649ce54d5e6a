use std::marker::PhantomData;
use std::time::Instant;

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::Level;
use reqwest::Client;
use serde_json::json;

use super::config::{AuthRequirement, Backend, BackendConfig};
use super::wire::{GeminiWire, OllamaWire, WireFormat};
use crate::errors::{ConversionResult, LangMathError};
use crate::logging::{log_event, preview};
use crate::prompt_builder::build_prompt;
use crate::settings::Credential;

const USER_AGENT: &str = "LangMath-Core/0.1";

/// Capability shared by every backend: turn selected text into math markup.
///
/// Implementations never panic or propagate faults; every failure path comes
/// back as an `Err` value. Each call issues at most one outbound request.
#[async_trait]
pub trait AiProvider: Send + Sync {
    fn backend(&self) -> Backend;

    async fn convert(&self, source_text: &str, credential: Option<&Credential>) -> ConversionResult;
}

/// Provider for the hosted Gemini API.
pub type CloudProvider = HttpProvider<GeminiWire>;
/// Provider for a loopback Ollama runtime.
pub type LocalProvider = HttpProvider<OllamaWire>;

/// Single-shot HTTP provider parameterised by its wire format.
pub struct HttpProvider<W: WireFormat> {
    client: Client,
    config: BackendConfig,
    _wire: PhantomData<fn() -> W>,
}

impl<W: WireFormat> HttpProvider<W> {
    pub fn with_config(config: BackendConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .context("failed to construct HTTP client")?;
        Ok(Self::with_client(client, config))
    }

    /// Reuse an existing client, e.g. one shared across backends.
    pub fn with_client(client: Client, config: BackendConfig) -> Self {
        Self {
            client,
            config,
            _wire: PhantomData,
        }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    async fn run(&self, source_text: &str, credential: Option<&Credential>) -> ConversionResult {
        if source_text.trim().is_empty() {
            return Err(LangMathError::EmptySelection);
        }

        let auth = match &self.config.auth {
            AuthRequirement::None => None,
            AuthRequirement::ApiKeyHeader { header } => {
                let key = credential
                    .and_then(Credential::api_key)
                    .ok_or(LangMathError::MissingCredential)?;
                Some((header.as_str(), key))
            }
        };

        let prompt = build_prompt(W::BACKEND, source_text);
        let mut request = self
            .client
            .post(W::endpoint(&self.config))
            .json(&W::request(&self.config, prompt));
        if let Some((header, key)) = auth {
            request = request.header(header, key);
        }

        let response = request.send().await.map_err(W::transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LangMathError::NetworkFailure(format!(
                "{} API error - {} {}",
                W::LABEL,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status")
            )));
        }

        let body = response.bytes().await.map_err(W::transport_error)?;
        let parsed: W::Response = serde_json::from_slice(&body)
            .map_err(|err| LangMathError::MalformedResponse(err.to_string()))?;
        let text = W::extract_text(parsed)?;

        if self.config.trim_response {
            Ok(text.trim().to_string())
        } else {
            Ok(text)
        }
    }
}

impl HttpProvider<GeminiWire> {
    pub fn new() -> Result<Self> {
        Self::with_config(BackendConfig::cloud())
    }
}

impl HttpProvider<OllamaWire> {
    pub fn new() -> Result<Self> {
        Self::with_config(BackendConfig::local())
    }
}

#[async_trait]
impl<W: WireFormat> AiProvider for HttpProvider<W> {
    fn backend(&self) -> Backend {
        W::BACKEND
    }

    async fn convert(
        &self,
        source_text: &str,
        credential: Option<&Credential>,
    ) -> ConversionResult {
        let started = Instant::now();
        let outcome = self.run(source_text, credential).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;
        let fingerprint = credential.and_then(Credential::fingerprint);
        match &outcome {
            Ok(text) => log_event(
                Level::Info,
                Some("AI-0200"),
                "langmath.provider",
                "conversion succeeded",
                None,
                Some(json!({
                    "backend": W::BACKEND,
                    "provider": self.config.id,
                    "model": self.config.model,
                    "elapsed_ms": elapsed_ms,
                    "key": fingerprint,
                    "preview": preview(text, 200),
                })),
            ),
            Err(err) => log_event(
                Level::Warn,
                Some("AI-0201"),
                "langmath.provider",
                "conversion failed",
                Some(err.explain()),
                Some(json!({
                    "backend": W::BACKEND,
                    "provider": self.config.id,
                    "model": self.config.model,
                    "elapsed_ms": elapsed_ms,
                    "key": fingerprint,
                    "error_code": err.code(),
                    "error": err.to_string(),
                })),
            ),
        }
        outcome
    }
}
