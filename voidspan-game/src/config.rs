use serde::{Deserialize, Serialize};

use crate::constants::{GEMINI_API_BASE, MODEL_ENDING_WRITER, MODEL_ILLUSTRATOR, MODEL_ITEM_JUDGE};
use crate::retry::RetryPolicy;

/// Where and how the oracle talks to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    pub api_base: String,
    pub item_model: String,
    pub ending_model: String,
    pub image_model: String,
    pub retry: RetryPolicy,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_base: GEMINI_API_BASE.to_string(),
            item_model: MODEL_ITEM_JUDGE.to_string(),
            ending_model: MODEL_ENDING_WRITER.to_string(),
            image_model: MODEL_ILLUSTRATOR.to_string(),
            retry: RetryPolicy::default(),
        }
    }
}

impl OracleConfig {
    /// Same models, different retry behaviour.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_gemini() {
        let config = OracleConfig::default();
        assert!(config.api_base.starts_with("https://generativelanguage.googleapis.com"));
        assert_eq!(config.item_model, "gemini-3-flash-preview");
        assert_eq!(config.retry.retries, 3);
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config: OracleConfig =
            serde_json::from_str(r#"{"item_model":"m","retry":{"retries":1,"initial_delay_ms":5}}"#)
                .unwrap();
        assert_eq!(config.item_model, "m");
        assert_eq!(config.image_model, "gemini-2.5-flash-image");
        assert_eq!(config.retry.initial_delay_ms, 5);
    }
}
