//! Error types for the Aura services.

use thiserror::Error;

/// Result type alias using the Aura error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the relay pipeline.
///
/// Every failure mode maps to exactly one HTTP status via [`Error::status_code`];
/// the `Display` output is the caller-visible detail string.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input or request
    #[error("{0}")]
    InvalidInput(String),

    /// Configuration error (e.g. missing provider credential)
    #[error("{0}")]
    Config(String),

    /// Provider call exceeded the timeout
    #[error("LLM API timeout")]
    UpstreamTimeout,

    /// Provider returned an HTTP error or the transport failed
    #[error("LLM API error: {0}")]
    Upstream(String),

    /// Provider reply was not valid JSON after fence-stripping.
    /// The raw reply is carried for logging, never shown to the caller.
    #[error("Failed to parse LLM response")]
    UpstreamParse(String),

    /// Any other unexpected failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get the HTTP status code for this error.
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::Config(_) | Self::UpstreamParse(_) | Self::Internal(_) => 500,
            Self::Upstream(_) => 502,
            Self::UpstreamTimeout => 504,
        }
    }

    /// Check if this error was caused by the upstream provider.
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::UpstreamTimeout | Self::Upstream(_) | Self::UpstreamParse(_)
        )
    }
}
