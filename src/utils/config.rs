use crate::types::{AppError, Result};
use std::env;

/// Runtime configuration, read once at startup from the environment.
///
/// Everything has a default except the completion API key: without one the
/// chat proxy stays up and answers with a canned "not configured" reply.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub chatbot: ChatbotConfig,
    pub backend: BackendConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct ChatbotConfig {
    /// Completion API credential. `None` switches the chat proxy to its
    /// fallback reply instead of failing requests.
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
}

/// Where the external product/image backend lives. The server never calls
/// it; the value is surfaced to the UI at build/deploy time and kept here so
/// one place documents the integration point.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub product_api_url: String,
}

#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Directory holding the trunk-built frontend. Served when it exists.
    pub dist_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .map_err(|e| AppError::Config(format!("invalid PORT: {}", e)))?,
            },
            chatbot: ChatbotConfig {
                api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
                api_base: env::var("OPENAI_API_BASE")
                    .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
                model: env::var("CHATBOT_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            },
            backend: BackendConfig {
                product_api_url: env::var("PRODUCT_API_URL")
                    .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            },
            ui: UiConfig {
                dist_dir: env::var("UI_DIST_DIR").unwrap_or_else(|_| "ui/dist".to_string()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env mutation is process-wide, so everything lives in one test.
    #[test]
    fn env_parsing() {
        env::remove_var("OPENAI_API_KEY");
        env::remove_var("CHATBOT_MODEL");
        let config = Config::from_env().unwrap();
        assert!(config.chatbot.api_key.is_none());
        assert_eq!(config.chatbot.model, "gpt-4o-mini");
        assert!(!config.server.host.is_empty());

        // Empty credential counts as unconfigured
        env::set_var("OPENAI_API_KEY", "");
        let config = Config::from_env().unwrap();
        assert!(config.chatbot.api_key.is_none());
        env::remove_var("OPENAI_API_KEY");
    }
}
