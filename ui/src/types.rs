//! API types matching the ApotheCare server

use serde::{Deserialize, Serialize};

/// Chat request sent to the pharmacist assistant proxy
#[derive(Debug, Clone, Serialize)]
pub struct ChatbotRequest {
    pub message: String,
}

/// Chat reply from the pharmacist assistant proxy
#[derive(Debug, Clone, Deserialize)]
pub struct ChatbotReply {
    pub reply: String,
}

/// Upload response from the external product-image backend
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub image_url: String,
}

/// Health response from the API
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error response from the API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Message in the chat widget
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: MessageRole::User,
            content: content.into(),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: MessageRole::Assistant,
            content: content.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// A storefront product card
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_cents: u32,
    pub image_url: Option<String>,
}

impl Product {
    pub fn price_display(&self) -> String {
        format!("€{}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}
