//! Sentiment analysis pipeline.
//!
//! Validates inbound text, sends it with a fixed prompt contract to the Groq
//! client, strips formatting fences from the reply, and normalizes the
//! model's JSON verdict into the caller-facing response shape.

use crate::provider::GroqClient;
use aura_common::{Error, Result};
use serde::{Deserialize, Serialize};

/// Minimum trimmed input length accepted for analysis.
const MIN_TEXT_LEN: usize = 3;

/// Maximum number of keywords returned to the caller.
const MAX_KEYWORDS: usize = 5;

/// Fixed system instruction. Pins the output contract so the reply can be
/// parsed as a bare JSON object.
const SYSTEM_PROMPT: &str = r#"You are a sentiment and keyword extraction system.
Analyze the given text and return ONLY a valid JSON object with this exact structure:
{
  "sentiment": "positive" | "negative" | "neutral",
  "sentiment_score": <float between -1.0 and 1.0>,
  "keywords": [<list of 3-5 key words or short phrases>]
}

Rules:
- sentiment_score: -1.0 = very negative, 0.0 = neutral, 1.0 = very positive
- keywords: extract the most important topics, emotions, or subjects (3-5 items max)
- Return ONLY the JSON, no additional text"#;

/// Normalized analysis result returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Sentiment score in [-1.0, 1.0], as reported by the model
    pub sentiment: f64,
    /// Up to 5 keywords, in the model's order
    pub keywords: Vec<String>,
    /// The model's sentiment label: "positive" | "negative" | "neutral"
    pub raw_sentiment: String,
}

/// The model's JSON verdict, with explicit defaults for absent fields.
#[derive(Debug, Deserialize)]
struct RawVerdict {
    #[serde(default = "default_sentiment_label")]
    sentiment: String,
    #[serde(default, deserialize_with = "coerce_score")]
    sentiment_score: f64,
    #[serde(default)]
    keywords: Vec<String>,
}

fn default_sentiment_label() -> String {
    "neutral".into()
}

/// Coerce the score to a float.
///
/// Models occasionally quote the number; a numeric string parses, anything
/// else stays a parse failure.
fn coerce_score<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Sentiment analyzer backed by the Groq chat-completion endpoint.
#[derive(Clone)]
pub struct SentimentAnalyzer {
    client: GroqClient,
}

impl SentimentAnalyzer {
    pub fn new(client: GroqClient) -> Self {
        Self { client }
    }

    /// Whether the provider credential is available.
    pub fn provider_configured(&self) -> bool {
        self.client.is_configured()
    }

    /// Run the full pipeline for one input text.
    ///
    /// Single linear pass: validate, call the provider once, fence-strip,
    /// parse, normalize. No retries.
    pub async fn analyze(&self, text: &str) -> Result<AnalyzeResponse> {
        if text.trim().chars().count() < MIN_TEXT_LEN {
            return Err(Error::InvalidInput("Text too short to analyze".into()));
        }

        let user_prompt = format!("Text to analyze: {}", text);
        let reply = self.client.complete(SYSTEM_PROMPT, &user_prompt).await?;

        normalize_reply(&reply)
    }
}

/// Parse a raw model reply into the normalized response.
fn normalize_reply(reply: &str) -> Result<AnalyzeResponse> {
    let payload = extract_json_payload(reply);

    let verdict: RawVerdict = serde_json::from_str(payload).map_err(|e| {
        tracing::error!(error = %e, raw_reply = %reply, "Failed to parse LLM reply as JSON");
        Error::UpstreamParse(reply.to_string())
    })?;

    let mut keywords = verdict.keywords;
    keywords.truncate(MAX_KEYWORDS);

    Ok(AnalyzeResponse {
        sentiment: verdict.sentiment_score,
        keywords,
        raw_sentiment: verdict.sentiment,
    })
}

/// Strip markdown fences from a model reply.
///
/// Models sometimes wrap the JSON object in a fenced block despite the
/// prompt contract. A ```json fence wins over a plain ``` fence; only the
/// first fenced block is inspected, and an unterminated fence yields the
/// remainder of the string.
fn extract_json_payload(reply: &str) -> &str {
    let trimmed = reply.trim();

    let after_fence = if let Some((_, rest)) = trimmed.split_once("```json") {
        rest
    } else if let Some((_, rest)) = trimmed.split_once("```") {
        rest
    } else {
        return trimmed;
    };

    match after_fence.split_once("```") {
        Some((inner, _)) => inner.trim(),
        None => after_fence.trim(),
    }
}
