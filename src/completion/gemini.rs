//! Google Gemini `generateContent` client.

use super::CompletionClient;
use crate::config::{Config, Credentials};
use crate::error::{Result, SqlPromptError};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Blocking Gemini API client.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    generation_config: Option<GenerationConfig>,
}

/// Gemini API request format
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<&'a GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

/// Gemini API response format
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl GeminiClient {
    /// Create a client from the run configuration.
    ///
    /// # Errors
    ///
    /// * `ConfigError` if no API key is available or the HTTP client cannot
    ///   be built.
    pub fn new(config: &Config, credentials: &Credentials) -> Result<Self> {
        let api_key = credentials.require_api_key()?.to_string();

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                SqlPromptError::ConfigError(format!("failed to build HTTP client: {}", e))
            })?;

        let generation_config = (config.temperature.is_some()
            || config.max_output_tokens.is_some())
        .then(|| GenerationConfig {
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        });

        Ok(Self {
            client,
            endpoint: config.endpoint_url(),
            api_key,
            generation_config,
        })
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> GenerateRequest<'a> {
        GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: self.generation_config.as_ref(),
        }
    }
}

impl CompletionClient for GeminiClient {
    fn complete(&self, prompt: &str) -> Result<String> {
        tracing::debug!(endpoint = %self.endpoint, prompt_len = prompt.len(), "sending prompt");

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .map_err(|e| {
                SqlPromptError::CompletionError(format!("request to Gemini API failed: {}", e))
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| {
            SqlPromptError::CompletionError(format!("failed to read Gemini API response: {}", e))
        })?;

        if !status.is_success() {
            tracing::warn!(%status, "Gemini API returned an error status");
            return Err(status_error(status.as_u16(), &body));
        }

        extract_text(&body)
    }
}

/// Describe a non-2xx response, preferring the service's own message.
fn status_error(status: u16, body: &str) -> SqlPromptError {
    let detail = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(code) => format!("{} ({})", envelope.error.message, code),
            None => envelope.error.message,
        },
        Err(_) => body.trim().to_string(),
    };

    SqlPromptError::CompletionError(format!("Gemini API returned HTTP {}: {}", status, detail))
}

/// Concatenate the text parts of the first candidate.
fn extract_text(body: &str) -> Result<String> {
    let response: GenerateResponse = serde_json::from_str(body).map_err(|e| {
        SqlPromptError::CompletionError(format!("malformed Gemini API response: {}", e))
    })?;

    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .map(|r| format!(" (prompt blocked: {})", r))
            .unwrap_or_default();
        return Err(SqlPromptError::CompletionError(format!(
            "Gemini API response contained no candidates{}",
            reason
        )));
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
        return Err(SqlPromptError::CompletionError(format!(
            "Gemini API response contained no text (finish reason: {})",
            reason
        )));
    }

    Ok(text)
}
