//! Route definitions for the Aura API.
//!
//! Provides the liveness probe, health probe, and the text analysis endpoint.

use crate::analyzer::{AnalyzeResponse, SentimentAnalyzer};
use crate::provider::GroqClient;
use aura_common::{Config, Error};
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: SentimentAnalyzer,
}

/// Analysis request body.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Error response.
///
/// The HTTP status is the only error classification exposed; the body
/// carries the short caller-visible detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Liveness probe response.
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub endpoints: Vec<String>,
}

/// Health probe response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub groq_api_configured: bool,
}

/// Build the complete router with all routes.
pub fn build_all_routes(config: &Config) -> Router {
    build_all_routes_with_client(GroqClient::new(config))
}

/// Build the complete router with a custom provider client.
/// This is useful for testing against a mock provider endpoint.
pub fn build_all_routes_with_client(client: GroqClient) -> Router {
    let state = AppState {
        analyzer: SentimentAnalyzer::new(client),
    };

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/process_text", post(process_text_handler))
        .with_state(state)
}

/// Map a pipeline error onto the HTTP boundary.
fn error_response(err: &Error) -> (StatusCode, Json<ErrorResponse>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// Liveness probe: fixed status payload plus the available operations.
async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Sentiment Aura Backend API".into(),
        status: "running".into(),
        endpoints: vec!["/process_text".into()],
    })
}

/// Health probe: process health plus provider credential state.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        groq_api_configured: state.analyzer.provider_configured(),
    })
}

/// Analyze text for sentiment and keywords via the Groq LLM.
async fn process_text_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let response = state.analyzer.analyze(&request.text).await.map_err(|e| {
        if e.is_upstream() {
            tracing::warn!(error = %e, "Analysis failed upstream");
        } else {
            tracing::debug!(error = %e, "Analysis rejected");
        }
        error_response(&e)
    })?;

    Ok(Json(response))
}
