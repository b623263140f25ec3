//! Aura API - Text analysis relay over the Groq LLM.
//!
//! This crate provides the Sentiment Aura backend service:
//! - Inbound text validation
//! - A fixed prompt contract for sentiment/keyword extraction
//! - Defensive parsing of the model's semi-structured reply
//! - Stable HTTP error mapping for provider and parse failures
//!
//! ## Architecture
//!
//! The relay sits between the frontend and the Groq API:
//! ```text
//! Caller → Relay (validate → prompt → one provider call → fence-strip → parse) → Caller
//! ```
//!
//! Each request is a single linear pass with no retries and no shared
//! mutable state.

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod analyzer;
pub mod provider;
pub mod routes;

pub use analyzer::{AnalyzeResponse, SentimentAnalyzer};
pub use provider::{GroqClient, GROQ_API_BASE_URL};
pub use routes::{AnalyzeRequest, ErrorResponse, HealthResponse, RootResponse};

use aura_common::Config;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

/// Build the service router with all routes and middleware.
///
/// CORS is fully open: the relay fronts a browser client and carries no
/// credentials of its own.
pub fn build_router(config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::build_all_routes(config).layer(cors)
}

/// Start the API server.
pub async fn start_server(config: &Config) -> anyhow::Result<()> {
    let addr = SocketAddr::from((
        config.network.bind.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    let router = build_router(config);

    tracing::info!("Starting Aura API on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
