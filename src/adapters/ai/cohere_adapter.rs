//! Cohere adapter for email copy generation.
//!
//! Implements `CopywriterPort` against the Cohere generate REST endpoint,
//! with robust JSON parsing and markdown stripping.

use crate::domain::{DomainError, EmailVariant};
use crate::ports::CopywriterPort;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Fixed generation parameters. Email copy needs bounded length and some
/// creative temperature, not determinism.
const MAX_TOKENS: u32 = 300;
const TEMPERATURE: f32 = 0.7;

/// Cohere copywriter adapter.
pub struct CohereAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl CohereAdapter {
    /// Create a new Cohere adapter.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.cohere.ai/v1/generate")
    /// * `api_key` - Cohere API key
    /// * `model` - Model name (e.g., "command-xlarge-nightly")
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
        }
    }

    /// Sanitize JSON response from the LLM.
    ///
    /// LLMs sometimes wrap JSON in markdown code blocks. This strips them.
    fn sanitize_json(raw_text: &str) -> String {
        let trimmed = raw_text.trim();

        // Handle markdown code blocks: ```json ... ``` or ``` ... ```
        if trimmed.starts_with("```") {
            let without_prefix = if trimmed.starts_with("```json") {
                trimmed.strip_prefix("```json").unwrap_or(trimmed)
            } else {
                trimmed.strip_prefix("```").unwrap_or(trimmed)
            };

            if let Some(end_idx) = without_prefix.rfind("```") {
                return without_prefix[..end_idx].trim().to_string();
            }
            return without_prefix.trim().to_string();
        }

        // Handle cases where JSON might be wrapped in surrounding prose
        if let Some(start) = trimmed.find('{') {
            if let Some(end) = trimmed.rfind('}') {
                if start < end {
                    return trimmed[start..=end].to_string();
                }
            }
        }

        trimmed.to_string()
    }

    /// Parse sanitized completion text into an email variant.
    ///
    /// The model is instructed to answer with a JSON object carrying exactly
    /// the keys `subject`, `body` and `call_to_action`; anything else is a
    /// generation error. Model output is never executed or evaluated.
    fn parse_variant(clean_json: &str) -> Result<EmailVariant, DomainError> {
        let fields: VariantFields = serde_json::from_str(clean_json).map_err(|e| {
            warn!(
                error = %e,
                json = %clean_json.chars().take(200).collect::<String>(),
                "variant JSON parse failed"
            );
            DomainError::Generation(format!("failed to parse variant JSON: {}", e))
        })?;

        Ok(EmailVariant {
            subject: fields.subject,
            body: fields.body,
            call_to_action: fields.call_to_action,
        })
    }
}

/// Cohere generate request structure.
#[derive(Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    max_tokens: u32,
    temperature: f32,
}

/// Cohere generate response structure.
#[derive(Deserialize)]
struct GenerateResponse {
    generations: Vec<Generation>,
}

#[derive(Deserialize)]
struct Generation {
    text: String,
}

/// Parsed completion (matches the JSON schema the prompt requests).
/// All three keys are required; serde rejects incomplete output.
#[derive(Deserialize)]
struct VariantFields {
    subject: String,
    body: String,
    call_to_action: String,
}

#[async_trait::async_trait]
impl CopywriterPort for CohereAdapter {
    async fn draft_variant(&self, prompt: &str) -> Result<EmailVariant, DomainError> {
        debug!(prompt_len = prompt.len(), model = %self.model, "sending prompt to Cohere");

        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Generation(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "Cohere API returned error");
            return Err(DomainError::Generation(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let generate_response: GenerateResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Generation(format!("failed to parse API response: {}", e)))?;

        let raw_text = generate_response
            .generations
            .first()
            .map(|g| g.text.clone())
            .ok_or_else(|| DomainError::Generation("no generations returned".to_string()))?;

        debug!(raw_len = raw_text.len(), "received Cohere completion");

        let clean_json = Self::sanitize_json(&raw_text);
        Self::parse_variant(&clean_json)
    }
}
