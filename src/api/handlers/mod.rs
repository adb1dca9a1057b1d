//! API request handlers.
//!
//! This module contains all HTTP request handlers organized by functionality.

/// Pharmacist chat proxy handler.
pub mod chatbot;
/// Health check handler.
pub mod health;
/// Connectivity/echo handlers (no production role).
pub mod test;
