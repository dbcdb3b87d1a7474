pub mod image_client;
pub mod text_client;

use crate::{
    config::ImagenConfig,
    error::{ImagenError, Result},
    models::GenerateContentResponse,
};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub use image_client::ImageClient;
pub use text_client::{TextClient, TextGenerationRequest};

/// Shared `generateContent` plumbing for the text and image clients.
#[derive(Clone)]
pub struct GeminiTransport {
    http: Client,
    api_key: String,
    models_url: String,
}

impl std::fmt::Debug for GeminiTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiTransport")
            .field("models_url", &self.models_url)
            .finish()
    }
}

impl GeminiTransport {
    pub fn new(config: &ImagenConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ImagenError::CredentialMissing)?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| ImagenError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_key,
            models_url: config.models_url(),
        })
    }

    pub async fn generate_content(
        &self,
        model: &str,
        payload: &Value,
    ) -> Result<GenerateContentResponse> {
        let url = format!("{}/{}:generateContent", self.models_url, model);
        log::debug!("POST {} (model: {})", url, model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(payload)
            .send()
            .await
            .map_err(|e| ImagenError::RequestError(self.redact(&e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = self.redact(&summarize_error_body(&body));
            log::warn!("Gemini API error: status={}, message={}", status, message);
            return Err(ImagenError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ImagenError::ResponseError(self.redact(&e.to_string())))?;
        serde_json::from_str::<GenerateContentResponse>(&body).map_err(|e| {
            ImagenError::ResponseError(format!(
                "Malformed generateContent response: {} (body: {})",
                e,
                truncate_for_log(&body, 200)
            ))
        })
    }

    fn redact(&self, text: &str) -> String {
        redact_api_key(text, &self.api_key)
    }
}

#[derive(Clone, Debug)]
pub struct GeminiClient {
    text_client: TextClient,
    image_client: ImageClient,
}

impl GeminiClient {
    pub fn new(config: &ImagenConfig) -> Result<Self> {
        let transport = GeminiTransport::new(config)?;
        log::info!("Gemini client initialized (image model: {})", config.image_model);

        Ok(Self {
            text_client: TextClient::new(transport.clone()),
            image_client: ImageClient::new(
                transport,
                config.image_model.clone(),
                config.aspect_ratio.clone(),
            ),
        })
    }

    pub fn text(&self) -> &TextClient {
        &self.text_client
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}

pub(crate) fn redact_api_key(text: &str, api_key: &str) -> String {
    let key = api_key.trim();
    if key.is_empty() {
        return text.to_string();
    }
    text.replace(key, "[redacted]")
}

pub(crate) fn truncate_for_log(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let truncated: String = value.chars().take(limit).collect();
    format!("{truncated}... (truncated)")
}

/// Prefers `error.message` from a Google error envelope, else the trimmed body.
pub(crate) fn summarize_error_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        if let Some(message) = value
            .pointer("/error/message")
            .or_else(|| value.get("message"))
            .and_then(|v| v.as_str())
        {
            return message.to_string();
        }
        return truncate_for_log(&value.to_string(), 500);
    }

    truncate_for_log(trimmed, 500)
}
