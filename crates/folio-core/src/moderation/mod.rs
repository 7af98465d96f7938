//! Toxicity moderation client
//!
//! Comment text is screened by an external classifier service before it is
//! accepted. The service is consulted over HTTP with a small JSON request
//! and answers with a verdict and confidence. Screening fails open: when
//! the service is not configured or unreachable, comments are accepted and
//! the skip is logged.

mod client;

use serde::{Deserialize, Serialize};

pub use client::{ModerationClient, ModerationError, Verdict};

/// Default timeout for classification requests
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Configuration for the moderation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationConfig {
    /// URL of the classifier endpoint (empty means disabled)
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ModerationConfig {
    /// Check if the endpoint is configured and screening enabled
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty()
    }

    /// Apply environment variable overrides to the configured values
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("FOLIO_MODERATION_ENDPOINT") {
            if !url.is_empty() {
                self.endpoint = url;
            }
        }

        if let Ok(timeout) = std::env::var("FOLIO_MODERATION_TIMEOUT") {
            if let Ok(seconds) = timeout.parse::<u64>() {
                self.timeout_seconds = seconds.clamp(1, 300);
            }
        }

        self
    }
}
