//! Completion API client
//!
//! The pharmacist chatbot is a thin proxy over a hosted completion API.
//! [`CompletionClient`] is the seam the HTTP handlers program against;
//! [`OpenAiCompletionClient`] is the live implementation for OpenAI and
//! OpenAI-compatible endpoints.
//!
//! There is deliberately no retry, streaming, or conversation state: every
//! request is one upstream call.

/// Core completion client trait and construction from config.
pub mod client;
/// OpenAI-compatible client implementation.
pub mod openai;

pub use client::CompletionClient;
pub use openai::OpenAiCompletionClient;
