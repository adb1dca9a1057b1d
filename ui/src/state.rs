//! Global application state

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

const STORAGE_KEY_EMAIL: &str = "apothecare_customer_email";

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Signed-in customer email. The sign-in itself is a stub; this only
    /// records what the form submitted.
    pub customer_email: RwSignal<Option<String>>,
    /// Error banner message
    pub error: RwSignal<Option<String>>,
    /// API base URL; empty means same origin
    pub api_base: RwSignal<String>,
    /// External product/image backend base URL
    pub product_api_base: RwSignal<String>,
}

impl AppState {
    pub fn new() -> Self {
        // Try to load from localStorage
        let email: Option<String> = LocalStorage::get(STORAGE_KEY_EMAIL).ok();

        Self {
            customer_email: RwSignal::new(email),
            error: RwSignal::new(None),
            api_base: RwSignal::new(String::new()),
            product_api_base: RwSignal::new("http://localhost:8000".to_string()),
        }
    }

    pub fn sign_in(&self, email: &str) {
        let _ = LocalStorage::set(STORAGE_KEY_EMAIL, &email);
        self.customer_email.set(Some(email.to_string()));
    }

    pub fn sign_out(&self) {
        LocalStorage::delete(STORAGE_KEY_EMAIL);
        self.customer_email.set(None);
    }

    pub fn is_signed_in(&self) -> bool {
        self.customer_email.get().is_some()
    }

    pub fn set_error(&self, msg: impl Into<String>) {
        self.error.set(Some(msg.into()));
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
