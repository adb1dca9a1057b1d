//! Completion client abstraction
//!
//! The chat proxy performs exactly one kind of upstream call: a system
//! prompt plus a single user message, answered in one shot. The trait keeps
//! that seam mockable for tests and leaves room for other OpenAI-compatible
//! endpoints without changing handler code.

use crate::types::Result;
use crate::utils::config::ChatbotConfig;
use async_trait::async_trait;
use std::sync::Arc;

/// Single-turn completion client.
///
/// Implementations must be cheap to clone behind an `Arc` and safe to share
/// across requests.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one system + user message pair and return the reply text.
    ///
    /// An empty reply is `Ok("")`; callers decide what to substitute.
    async fn complete(&self, system: &str, message: &str) -> Result<String>;

    /// Get the model name/identifier
    fn model_name(&self) -> &str;
}

impl ChatbotConfig {
    /// Build the live completion client, or `None` when no credential is
    /// configured. The chat proxy treats `None` as "answer with the canned
    /// fallback", never as an error.
    pub fn client(&self) -> Option<Arc<dyn CompletionClient>> {
        let api_key = self.api_key.as_ref()?;
        Some(Arc::new(super::openai::OpenAiCompletionClient::new(
            api_key.clone(),
            self.api_base.clone(),
            self.model.clone(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> ChatbotConfig {
        ChatbotConfig {
            api_key: api_key.map(str::to_string),
            api_base: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
        }
    }

    #[test]
    fn no_credential_means_no_client() {
        assert!(config(None).client().is_none());
    }

    #[test]
    fn credential_builds_client_with_model() {
        let client = config(Some("sk-test")).client().expect("client");
        assert_eq!(client.model_name(), "gpt-4o-mini");
    }
}
