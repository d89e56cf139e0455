//! Vision service client for extracting building features from photos.
//!
//! Talks to an OpenAI-compatible chat-completions endpoint. Each photo is sent
//! as a base64 data URL together with [`FEATURE_EXTRACTION_PROMPT`]; the model
//! answers with a JSON [`FeatureReport`].

use anyhow::{Context, Result};
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, instrument, warn};

use super::prompts::FEATURE_EXTRACTION_PROMPT;
use super::{FeatureExtractor, ImageInput, ServiceStatus};
use crate::config::VisionSettings;
use crate::domain::FeatureReport;

#[derive(Debug, Error)]
pub enum VisionError {
    #[error("Vision service not configured. Set VISION_API_KEY environment variable.")]
    MissingApiKey,

    #[error("Image is empty: {0}")]
    EmptyImage(String),

    #[error("Unsupported image type: {0}")]
    UnsupportedImage(String),

    #[error("Vision service unavailable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Vision service error ({status}): {message}")]
    Status { status: StatusCode, message: String },

    #[error("Vision service returned no content")]
    EmptyResponse,

    #[error("Failed to parse vision response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl VisionError {
    /// Worth another attempt: connection trouble, timeouts, throttling and
    /// server-side failures.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Self::Status { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            _ => false,
        }
    }
}

/// Client for the vision service.
#[derive(Clone)]
pub struct VisionClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
    retry_max_elapsed: Duration,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: [ContentPart<'a>; 2],
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
    detail: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Error envelope returned by OpenAI-compatible services.
#[derive(Debug, Deserialize)]
struct VisionErrorResponse {
    error: VisionErrorBody,
}

#[derive(Debug, Deserialize)]
struct VisionErrorBody {
    message: String,
}

impl VisionClient {
    /// Create a new vision service client.
    pub fn new(settings: &VisionSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        tracing::info!(
            base_url = %settings.service_url,
            model = %settings.model,
            configured = settings.api_key.is_some(),
            "Vision client initialized"
        );

        Ok(Self {
            client,
            base_url: settings.service_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            retry_max_elapsed: Duration::from_secs(settings.retry_max_elapsed_seconds),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Analyze a single photo.
    #[instrument(skip(self, image), fields(image = %image.file_name, bytes = image.bytes.len()))]
    pub async fn analyze(&self, image: &ImageInput) -> Result<FeatureReport, VisionError> {
        let api_key = self.api_key.as_deref().ok_or(VisionError::MissingApiKey)?;

        if image.bytes.is_empty() {
            return Err(VisionError::EmptyImage(image.file_name.clone()));
        }
        let media_type = image
            .media_type()
            .ok_or_else(|| VisionError::UnsupportedImage(image.file_name.clone()))?;

        let data_url = format!("data:{};base64,{}", media_type, STANDARD.encode(&image.bytes));
        let body = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: [
                    ContentPart::Text {
                        text: FEATURE_EXTRACTION_PROMPT,
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: data_url,
                            detail: "high",
                        },
                    },
                ],
            }],
            max_tokens: self.max_tokens,
        };

        let content = self.complete_with_retry(api_key, &body).await?;
        let report = parse_feature_payload(&content)?;

        debug!(
            confidence = report.overall_confidence,
            quality = %report.photo_quality,
            "Photo analyzed"
        );

        Ok(report)
    }

    async fn complete_with_retry(
        &self,
        api_key: &str,
        body: &ChatRequest<'_>,
    ) -> Result<String, VisionError> {
        let policy = ExponentialBackoffBuilder::new()
            .with_initial_interval(Duration::from_millis(500))
            .with_max_elapsed_time(Some(self.retry_max_elapsed))
            .build();

        backoff::future::retry(policy, || async move {
            self.complete(api_key, body).await.map_err(|e| {
                if e.is_transient() {
                    warn!(error = %e, "Vision request failed, retrying");
                    backoff::Error::transient(e)
                } else {
                    backoff::Error::permanent(e)
                }
            })
        })
        .await
    }

    /// One chat-completions round trip, returning the message text.
    async fn complete(&self, api_key: &str, body: &ChatRequest<'_>) -> Result<String, VisionError> {
        let url = format!("{}/chat/completions", self.base_url);

        debug!(url = %url, "Vision service request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<VisionErrorResponse>()
                .await
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("Vision service error: {}", status));

            if status == StatusCode::UNAUTHORIZED {
                error!("Vision service authentication failed");
            }
            return Err(VisionError::Status { status, message });
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(VisionError::EmptyResponse)
    }

    /// Check the vision service is reachable with the configured key.
    pub async fn health_check(&self) -> Result<()> {
        let api_key = self
            .api_key
            .as_deref()
            .context("Vision service not configured")?;
        let url = format!("{}/models", self.base_url);

        self.client
            .get(&url)
            .bearer_auth(api_key)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .context("Vision service health check failed")?
            .error_for_status()
            .context("Vision service unhealthy")?;

        Ok(())
    }
}

#[async_trait]
impl FeatureExtractor for VisionClient {
    async fn extract(&self, image: &ImageInput) -> FeatureReport {
        match self.analyze(image).await {
            Ok(report) => report,
            Err(e) => {
                warn!(image = %image.file_name, error = %e, "Photo analysis failed");
                FeatureReport::from_error(e.to_string())
            }
        }
    }

    async fn health_check(&self) -> ServiceStatus {
        if !self.is_configured() {
            return ServiceStatus::NotConfigured;
        }
        match VisionClient::health_check(self).await {
            Ok(()) => ServiceStatus::Ok,
            Err(e) => {
                warn!(error = %e, "Vision service health check failed");
                ServiceStatus::Error
            }
        }
    }
}

/// Parse the model's answer into a normalized report.
///
/// Accepts the bare JSON object, one wrapped in a markdown code fence, or one
/// surrounded by prose.
pub fn parse_feature_payload(content: &str) -> Result<FeatureReport, VisionError> {
    let json = extract_json_object(strip_code_fence(content));
    let report: FeatureReport = serde_json::from_str(json)?;
    Ok(FeatureReport {
        error: None,
        ..report.normalized()
    })
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // drop the info string (`json`) on the opening fence line
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn extract_json_object(content: &str) -> &str {
    match (content.find('{'), content.rfind('}')) {
        (Some(start), Some(end)) if start < end => &content[start..=end],
        _ => content,
    }
}
