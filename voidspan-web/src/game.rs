//! Web-specific game plumbing
//!
//! Browser implementations of the voidspan-game seams (HTTP backend and key
//! store) plus re-exports of the core types.

use async_trait::async_trait;
use gloo::net::http::Request;
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use std::time::Duration;

// Re-export all types from voidspan-game
pub use voidspan_game::*;

use voidspan_game::constants::GEMINI_KEY_HEADER;

/// localStorage key holding the Gemini API key.
pub const API_KEY_STORAGE_KEY: &str = "voidspan.api_key";

/// `fetch`-based backend with browser timers for retry back-off.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooBackend;

#[async_trait(?Send)]
impl HttpBackend for GlooBackend {
    async fn post_json(&self, url: &str, api_key: &str, body: &str) -> Result<HttpReply, ApiError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .header(GEMINI_KEY_HEADER, api_key)
            .body(body.to_string())
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(HttpReply { status, body })
    }

    async fn sleep(&self, duration: Duration) {
        gloo::timers::future::sleep(duration).await;
    }
}

/// Web-specific key storage using localStorage
#[derive(Debug, Default, Clone, Copy)]
pub struct WebKeyStore;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl KeyStore for WebKeyStore {
    type Error = WebStorageError;

    fn load(&self) -> Result<Option<String>, Self::Error> {
        match LocalStorage::get::<String>(API_KEY_STORAGE_KEY) {
            Ok(key) => Ok(Some(key)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(StorageError::SerdeError(err)) => Err(WebStorageError::Serialization(err)),
            Err(err) => Err(WebStorageError::Storage(err.to_string())),
        }
    }

    fn save(&self, key: &str) -> Result<(), Self::Error> {
        LocalStorage::set(API_KEY_STORAGE_KEY, key.trim())
            .map_err(|e| WebStorageError::Storage(e.to_string()))
    }

    fn clear(&self) -> Result<(), Self::Error> {
        LocalStorage::delete(API_KEY_STORAGE_KEY);
        Ok(())
    }
}

/// Masked form of the stored key, for display.
#[must_use]
pub fn stored_key_mask() -> Option<String> {
    WebKeyStore
        .load()
        .ok()
        .flatten()
        .filter(|key| !key.trim().is_empty())
        .map(|key| mask_api_key(&key))
}

/// Oracle talking to Gemini with the stored key.
///
/// Without a key every call fails with [`ApiError::MissingKey`], which the
/// purchase flow treats like a rejected key.
#[must_use]
pub fn web_oracle() -> GeminiOracle<GlooBackend> {
    let key = WebKeyStore.load().unwrap_or_else(|err| {
        log::error!("could not read API key: {err}");
        crate::dom::console_error(&err.to_string());
        None
    });
    GeminiOracle::new(GlooBackend, key.unwrap_or_default(), OracleConfig::default())
}
