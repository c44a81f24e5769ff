/// OpenAI Client — the single point of entry for completion calls.
///
/// ARCHITECTURAL RULE: no other module may call the provider directly.
/// All completion traffic goes through this module.
///
/// Exactly one request per call: no retry, no backoff, no caching. A failed
/// completion is a terminal outcome for the user action that triggered it.
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// Token ceiling for a single scorecard completion.
const MAX_TOKENS: u32 = 1200;
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Missing OPENAI_API_KEY")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OpenAI request failed ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Failed to decode OpenAI response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No content in OpenAI response")]
    EmptyContent,

    #[error("OpenAI returned invalid JSON format")]
    InvalidJson,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
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

/// Chat-completions client. Model and key come from process configuration,
/// never from caller input.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl LlmClient {
    pub fn new(api_key: Option<String>, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends a single-message chat request and returns the completion text.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                body: raw,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&raw)?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(LlmError::EmptyContent)?;

        debug!(model = %self.model, "completion received ({} bytes)", content.len());
        Ok(content)
    }

    /// Completes and parses the reply as JSON after stripping any wrapping
    /// markdown code fences. The prompt must ask for a bare JSON object.
    pub async fn complete_json<T: DeserializeOwned>(&self, prompt: &str) -> Result<T, LlmError> {
        let content = self.complete(prompt).await?;
        let cleaned = strip_json_fences(&content);

        serde_json::from_str(cleaned).map_err(|e| {
            // Log the offending completion server-side; never echo it to callers.
            error!("failed to parse completion as JSON: {e}; content: {content}");
            LlmError::InvalidJson
        })
    }
}

/// Strips one wrapping ```json ... ``` (or bare ``` ... ```) fence pair from
/// completion text. Unfenced input passes through trimmed.
fn strip_json_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
    else {
        return trimmed;
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
