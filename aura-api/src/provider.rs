//! Groq chat-completion client.
//!
//! Speaks the OpenAI-compatible `/v1/chat/completions` format. One request
//! per call, bounded by the configured timeout; no retries.

use aura_common::{Config, Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Fixed Groq API base URL. The endpoint is not configurable; tests inject
/// a mock server via [`GroqClient::with_base_url`].
pub const GROQ_API_BASE_URL: &str = "https://api.groq.com/openai";

/// Client for the Groq chat-completion endpoint.
#[derive(Clone)]
pub struct GroqClient {
    base_url: String,
    api_key: Option<String>,
    model: String,
    temperature: f64,
    max_tokens: i64,
    // Total per-request bound, from send through body read
    timeout: std::time::Duration,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: i64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

impl GroqClient {
    /// Create a client against the fixed Groq endpoint.
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(config, GROQ_API_BASE_URL)
    }

    /// Create a client against a custom base URL (for tests).
    pub fn with_base_url(config: &Config, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: config.groq_api_key().map(String::from),
            model: config.provider.model.clone(),
            temperature: config.provider.temperature,
            max_tokens: config.provider.max_tokens,
            timeout: std::time::Duration::from_secs(config.provider.timeout_secs),
            client: Client::new(),
        }
    }

    /// Whether an API key is available.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send a system+user prompt pair and return the first choice's content.
    ///
    /// Fails fast with a config error before any network I/O when no API key
    /// is set.
    pub async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let Some(api_key) = self.api_key.as_ref() else {
            return Err(Error::Config("GROQ_API_KEY not configured".into()));
        };

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let url = format!("{}/v1/chat/completions", self.base_url);

        tracing::debug!(
            model = %self.model,
            prompt_length = user_prompt.len(),
            "Calling Groq API"
        );

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Groq API request failed");
            return Err(Error::Upstream(format!("{}: {}", status.as_u16(), body)));
        }

        let body = response.text().await.map_err(classify_transport_error)?;

        let envelope: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, raw_body = %body, "Groq reply envelope is not valid JSON");
            Error::UpstreamParse(body.clone())
        })?;

        envelope
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| Error::Internal("empty choices in Groq reply".into()))
    }
}

/// Map a reqwest transport failure onto the relay error taxonomy.
///
/// A timeout expiry must surface as its own category (504 at the boundary);
/// everything else is an upstream error.
fn classify_transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::UpstreamTimeout
    } else {
        Error::Upstream(err.to_string())
    }
}
