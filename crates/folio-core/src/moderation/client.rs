//! HTTP client for the toxicity classifier

use std::time::Duration;

use serde::Deserialize;

use super::ModerationConfig;

/// Classifier verdict for a piece of text
#[derive(Debug, Clone, Deserialize)]
pub struct Verdict {
    /// Whether the text was flagged as toxic
    pub is_toxic: bool,
    /// Classifier confidence (0.0 to 1.0)
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum ModerationError {
    #[error("moderation endpoint not configured")]
    Disabled,

    #[error("moderation service returned status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// HTTP client for the moderation service
pub struct ModerationClient {
    config: ModerationConfig,
    user_agent: String,
}

impl ModerationClient {
    /// Create a new client with the given configuration
    pub fn new(config: ModerationConfig) -> Self {
        let user_agent = format!(
            "folio/{} ({})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS
        );

        Self { config, user_agent }
    }

    /// Check if the endpoint is configured for screening
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Ask the classifier for a verdict on the given text
    pub fn classify(&self, content: &str) -> Result<Verdict, ModerationError> {
        if !self.config.is_configured() {
            return Err(ModerationError::Disabled);
        }

        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .build();

        let response = agent
            .post(&self.config.endpoint)
            .set("Content-Type", "application/json")
            .set("User-Agent", &self.user_agent)
            .send_json(serde_json::json!({ "content": content }));

        match response {
            Ok(res) => res
                .into_json::<Verdict>()
                .map_err(|e| ModerationError::InvalidResponse(e.to_string())),
            Err(ureq::Error::Status(code, _)) => Err(ModerationError::Status(code)),
            Err(ureq::Error::Transport(e)) => Err(ModerationError::Network(e.to_string())),
        }
    }

    /// Screen comment text, failing open.
    ///
    /// Returns the verdict when the classifier answered, `None` when
    /// screening is disabled or the service could not be reached.
    pub fn screen(&self, content: &str) -> Option<Verdict> {
        match self.classify(content) {
            Ok(verdict) => Some(verdict),
            Err(ModerationError::Disabled) => None,
            Err(e) => {
                tracing::warn!(error = %e, "moderation service unavailable, skipping toxicity check");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_client_is_disabled() {
        let client = ModerationClient::new(ModerationConfig::default());
        assert!(!client.is_configured());
        assert!(matches!(
            client.classify("hello"),
            Err(ModerationError::Disabled)
        ));
    }

    #[test]
    fn test_screen_fails_open_when_disabled() {
        let client = ModerationClient::new(ModerationConfig::default());
        assert!(client.screen("hello").is_none());
    }

    #[test]
    fn test_screen_fails_open_when_unreachable() {
        let config = ModerationConfig {
            // Nothing listens on the discard port
            endpoint: "http://127.0.0.1:9/predict".to_string(),
            timeout_seconds: 1,
        };
        let client = ModerationClient::new(config);
        assert!(client.screen("hello").is_none());
    }

    #[test]
    fn test_user_agent_carries_version() {
        let client = ModerationClient::new(ModerationConfig::default());
        assert!(client.user_agent.starts_with("folio/"));
    }
}
