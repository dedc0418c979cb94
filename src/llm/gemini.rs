//! Google Gemini provider implementation

use super::types::{LlmMessage, LlmRequest, LlmResponse, Usage};
use super::{LlmError, LlmService};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Public generative-language endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

const API_KEY_HEADER: &str = "x-goog-api-key";
const LIST_PAGE_SIZE: u32 = 1000;

/// Model metadata as reported by the models endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteModel {
    /// Resource name, e.g. `models/gemini-2.5-pro`
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

/// Gemini service implementation
pub struct GeminiService {
    client: Client,
    api_key: String,
    base_url: String,
    model_id: String,
}

impl GeminiService {
    /// Create a client for `model`. `base_url` overrides the public endpoint
    /// (gateways, local stubs).
    ///
    /// No request timeout is configured; the transport default applies.
    pub fn new(
        api_key: impl Into<String>,
        model: &str,
        base_url: Option<&str>,
    ) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::auth("API key is empty"));
        }

        let model_id = model.trim().trim_start_matches("models/").to_string();
        if model_id.is_empty() {
            return Err(LlmError::invalid_request("Model identifier is empty"));
        }

        let base_url = base_url
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let client = Client::builder()
            .build()
            .map_err(|e| LlmError::unknown(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url,
            model_id,
        })
    }

    fn model_url(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model_id)
    }

    fn translate_request(request: &LlmRequest) -> GeminiRequest {
        let contents = request
            .messages
            .iter()
            .map(|msg: &LlmMessage| GeminiContent {
                role: Some(msg.role.wire_name().to_string()),
                parts: vec![GeminiPart {
                    text: Some(msg.text.clone()),
                }],
            })
            .collect();

        GeminiRequest { contents }
    }

    fn normalize_response(resp: GeminiResponse) -> Result<LlmResponse, LlmError> {
        let Some(candidate) = resp.candidates.into_iter().next() else {
            let reason = resp
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .map_or_else(String::new, |r| format!(" (prompt blocked: {r})"));
            return Err(LlmError::malformed(format!("No candidates in response{reason}")));
        };

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            let reason = candidate.finish_reason.as_deref().unwrap_or("UNKNOWN");
            return Err(LlmError::malformed(format!(
                "Response contained no text (finish reason: {reason})"
            )));
        }

        let usage = resp.usage_metadata.unwrap_or_default();
        Ok(LlmResponse {
            text,
            finish_reason: candidate.finish_reason,
            usage: Usage {
                input_tokens: u64::from(usage.prompt_token_count),
                output_tokens: u64::from(usage.candidates_token_count),
            },
        })
    }

    /// Send a request and return the body of a successful response
    async fn execute(&self, builder: RequestBuilder) -> Result<String, LlmError> {
        let response = builder
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::network(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    LlmError::network(format!("Connection failed: {e}"))
                } else {
                    LlmError::unknown(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::network(format!("Failed to read response: {e}")))?;

        if status.is_success() {
            return Ok(body);
        }

        if let Ok(error_resp) = serde_json::from_str::<GeminiErrorResponse>(&body) {
            let message = error_resp.error.message;
            // An invalid key is reported as 400 INVALID_ARGUMENT
            if status.as_u16() == 400 && message.contains("API key") {
                return Err(LlmError::auth(format!("Authentication failed: {message}")));
            }
            return Err(LlmError::from_status(status.as_u16(), &message));
        }
        Err(LlmError::from_status(status.as_u16(), &body))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, LlmError> {
        let body = self.execute(self.client.get(url).query(query)).await?;
        serde_json::from_str(&body)
            .map_err(|e| LlmError::malformed(format!("Failed to parse response: {e} - body: {body}")))
    }

    /// List every model the key has access to, following pagination
    pub async fn list_models(&self) -> Result<Vec<RemoteModel>, LlmError> {
        let url = format!("{}/models", self.base_url);
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query = vec![("pageSize", LIST_PAGE_SIZE.to_string())];
            if let Some(token) = page_token.take() {
                query.push(("pageToken", token));
            }

            let page: GeminiModelList = self.get_json(&url, &query).await?;
            models.extend(page.models);

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(models)
    }
}

#[async_trait]
impl LlmService for GeminiService {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        let gemini_request = Self::translate_request(request);
        let url = format!("{}:generateContent", self.model_url());

        let body = self
            .execute(self.client.post(&url).json(&gemini_request))
            .await?;

        let gemini_response: GeminiResponse = serde_json::from_str(&body).map_err(|e| {
            LlmError::malformed(format!("Failed to parse response: {e} - body: {body}"))
        })?;

        Self::normalize_response(gemini_response)
    }

    async fn describe_model(&self) -> Result<RemoteModel, LlmError> {
        self.get_json(&self.model_url(), &[]).await
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<GeminiUsageMetadata>,
    prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct GeminiUsageMetadata {
    prompt_token_count: u32,
    candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiModelList {
    #[serde(default)]
    models: Vec<RemoteModel>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiError,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}
