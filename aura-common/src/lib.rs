//! Aura Common - Shared configuration, errors, and logging for the Aura services.
//!
//! This crate provides:
//! - Configuration types and loading with env overrides
//! - The relay error taxonomy and HTTP status mapping
//! - Logging setup

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, ObservabilityConfig, ProviderConfig, SecretsConfig, ServerConfig};
pub use error::{Error, Result};
pub use logging::init_logging;
