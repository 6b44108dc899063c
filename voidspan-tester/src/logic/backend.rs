//! In-process Gemini endpoint that fails on demand.
use async_trait::async_trait;
use serde_json::json;
use std::cell::RefCell;
use std::time::Duration;

use voidspan_game::constants::{MODEL_ENDING_WRITER, MODEL_ILLUSTRATOR, MODEL_ITEM_JUDGE};
use voidspan_game::{ApiError, HttpBackend, HttpReply};

/// Answers like the real endpoint after `failures` overloaded replies.
///
/// Sleeps are recorded instead of waited, so retry schedules run instantly.
#[derive(Debug, Default)]
pub struct FlakyBackend {
    failures_left: RefCell<u32>,
    calls: RefCell<u32>,
    sleeps: RefCell<Vec<Duration>>,
}

impl FlakyBackend {
    #[must_use]
    pub fn failing(failures: u32) -> Self {
        Self {
            failures_left: RefCell::new(failures),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn calls(&self) -> u32 {
        *self.calls.borrow()
    }

    #[must_use]
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }
}

fn text_body(text: &str) -> String {
    json!({ "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }] })
        .to_string()
}

fn image_body() -> String {
    json!({ "candidates": [{ "content": { "parts": [
        { "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } }
    ] } }] })
    .to_string()
}

fn overloaded() -> HttpReply {
    HttpReply {
        status: 503,
        body: json!({ "error": { "code": 503, "message": "The model is overloaded." } })
            .to_string(),
    }
}

#[async_trait(?Send)]
impl HttpBackend for FlakyBackend {
    async fn post_json(&self, url: &str, _api_key: &str, _body: &str) -> Result<HttpReply, ApiError> {
        *self.calls.borrow_mut() += 1;
        {
            let mut left = self.failures_left.borrow_mut();
            if *left > 0 {
                *left -= 1;
                return Ok(overloaded());
            }
        }

        let body = if url.contains(MODEL_ILLUSTRATOR) {
            image_body()
        } else if url.contains(MODEL_ITEM_JUDGE) {
            text_body(
                r#"{"cost": 25000, "timeKilledYears": "1,200,000", "sanityChange": 2, "story": "s", "synergyAnalysis": "none"}"#,
            )
        } else if url.contains(MODEL_ENDING_WRITER) {
            text_body(r#"{"title": "t", "story": "s", "evaluation": "e", "scoreGrade": "B"}"#)
        } else {
            return Ok(HttpReply {
                status: 404,
                body: json!({ "error": { "code": 404, "message": "unknown model" } }).to_string(),
            });
        };
        Ok(HttpReply { status: 200, body })
    }

    async fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
    }
}
