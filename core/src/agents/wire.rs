//! Typed request and response schemas for each backend.
//!
//! Response bodies are decoded into explicit structs; a body that lacks the
//! text field is reported as [`LangMathError::MalformedResponse`] instead of
//! being coerced into an empty string.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::config::{Backend, BackendConfig};
use crate::errors::LangMathError;

/// Backend-specific shape of one generate call.
pub trait WireFormat: Send + Sync + 'static {
    type Request: Serialize + Send + Sync;
    type Response: DeserializeOwned;

    const BACKEND: Backend;
    /// Name used in diagnostics.
    const LABEL: &'static str;

    fn endpoint(config: &BackendConfig) -> String;
    fn request(config: &BackendConfig, prompt: String) -> Self::Request;
    fn extract_text(response: Self::Response) -> Result<String, LangMathError>;
    fn transport_error(err: reqwest::Error) -> LangMathError;
}

// ---------------------------------------------------------------------------
// Gemini generateContent
// ---------------------------------------------------------------------------

pub struct GeminiWire;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    pub content: Option<GeminiContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl WireFormat for GeminiWire {
    type Request = GenerateContentRequest;
    type Response = GenerateContentResponse;

    const BACKEND: Backend = Backend::Cloud;
    const LABEL: &'static str = "Gemini";

    fn endpoint(config: &BackendConfig) -> String {
        config.url(&format!("models/{}:generateContent", config.model))
    }

    fn request(config: &BackendConfig, prompt: String) -> Self::Request {
        let generation_config = if config.temperature.is_some() || config.top_p.is_some() {
            Some(GenerationConfig {
                temperature: config.temperature,
                top_p: config.top_p,
            })
        } else {
            None
        };
        GenerateContentRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart { text: Some(prompt) }],
            }],
            generation_config,
        }
    }

    fn extract_text(response: Self::Response) -> Result<String, LangMathError> {
        let Some(candidate) = response.candidates.into_iter().next() else {
            let reason = response
                .prompt_feedback
                .and_then(|feedback| feedback.block_reason)
                .map(|reason| format!("no candidates returned (blocked: {reason})"))
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(LangMathError::MalformedResponse(reason));
        };

        let texts: Vec<String> = candidate
            .content
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if texts.is_empty() {
            let finish = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
            return Err(LangMathError::MalformedResponse(format!(
                "candidate has no text parts (finish reason: {finish})"
            )));
        }
        Ok(texts.concat())
    }

    fn transport_error(err: reqwest::Error) -> LangMathError {
        LangMathError::NetworkFailure(format!("Gemini request failed: {err}"))
    }
}

// ---------------------------------------------------------------------------
// Ollama /api/generate
// ---------------------------------------------------------------------------

pub struct OllamaWire;

#[derive(Debug, Serialize)]
pub struct OllamaGenerateRequest {
    pub model: String,
    pub prompt: String,
    pub options: OllamaOptions,
    pub stream: bool,
}

#[derive(Debug, Serialize)]
pub struct OllamaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct OllamaGenerateResponse {
    pub response: Option<String>,
    pub error: Option<String>,
}

impl WireFormat for OllamaWire {
    type Request = OllamaGenerateRequest;
    type Response = OllamaGenerateResponse;

    const BACKEND: Backend = Backend::Local;
    const LABEL: &'static str = "Ollama";

    fn endpoint(config: &BackendConfig) -> String {
        config.url("api/generate")
    }

    fn request(config: &BackendConfig, prompt: String) -> Self::Request {
        OllamaGenerateRequest {
            model: config.model.clone(),
            prompt,
            options: OllamaOptions {
                temperature: config.temperature,
                top_p: config.top_p,
            },
            stream: false,
        }
    }

    fn extract_text(response: Self::Response) -> Result<String, LangMathError> {
        if let Some(error) = response.error {
            return Err(LangMathError::NetworkFailure(format!(
                "Ollama API error - {error}"
            )));
        }
        response.response.ok_or_else(|| {
            LangMathError::MalformedResponse("missing `response` field".to_string())
        })
    }

    fn transport_error(err: reqwest::Error) -> LangMathError {
        LangMathError::ConnectionFailure(format!("Could not connect to local instance: {err}"))
    }
}
