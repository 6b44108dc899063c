use async_trait::async_trait;
use futures::executor::block_on;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::time::Duration;

use voidspan_game::{
    ApiError, Difficulty, GeminiOracle, Grade, HttpBackend, HttpReply, OracleConfig, RetryPolicy,
    VoidRun,
};

/// Answers by model name, the way the real endpoint routes requests.
#[derive(Default)]
struct RoutedBackend {
    flaky_judge: RefCell<u32>,
    seen: RefCell<Vec<(String, Value)>>,
    slept: RefCell<Duration>,
}

fn wrap_text(text: &str) -> String {
    json!({ "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }] })
        .to_string()
}

fn wrap_image() -> String {
    json!({ "candidates": [{ "content": { "parts": [
        { "inlineData": { "mimeType": "image/jpeg", "data": "/9j/AA==" } }
    ] } }] })
    .to_string()
}

#[async_trait(?Send)]
impl HttpBackend for RoutedBackend {
    async fn post_json(&self, url: &str, api_key: &str, body: &str) -> Result<HttpReply, ApiError> {
        assert_eq!(api_key, "test-key");
        let parsed: Value = serde_json::from_str(body).expect("request is JSON");
        self.seen.borrow_mut().push((url.to_string(), parsed));

        let ok = |body: String| Ok(HttpReply { status: 200, body });
        if url.contains("flash-image") {
            return ok(wrap_image());
        }
        if url.contains("flash-preview") {
            let mut flaky = self.flaky_judge.borrow_mut();
            if *flaky > 0 {
                *flaky -= 1;
                return Err(ApiError::Transport("connection reset".into()));
            }
            return ok(wrap_text(
                "```json\n{\"cost\": 20000, \"timeKilledYears\": \"500000000\", \"sanityChange\": 4, \"story\": \"s\", \"synergyAnalysis\": \"n\"}\n```",
            ));
        }
        ok(wrap_text(
            r#"{"title":"解脱","story":"...","evaluation":"完璧","scoreGrade":"A"}"#,
        ))
    }

    async fn sleep(&self, duration: Duration) {
        *self.slept.borrow_mut() += duration;
    }
}

#[test]
fn full_run_over_the_wire() {
    let backend = RoutedBackend::default();
    *backend.flaky_judge.borrow_mut() = 2;
    let oracle = GeminiOracle::new(backend, "test-key", OracleConfig::default());
    let mut run = VoidRun::new(oracle, Difficulty::Easy);

    let outcome = block_on(run.purchase("永遠に解けないパズル")).unwrap();
    assert!(outcome.ended_run());
    assert!(run.state().is_victory());
    assert_eq!(run.state().remaining_money, 99_980_000);
    assert_eq!(
        run.state().history[0].image_url,
        "data:image/jpeg;base64,/9j/AA=="
    );

    let ending = block_on(run.conclude()).cloned().unwrap();
    assert_eq!(ending.grade, Grade::A);
    assert_eq!(ending.title, "解脱");

    let backend = run.oracle().backend();
    assert_eq!(*backend.slept.borrow(), Duration::from_millis(3_000));
    let seen = backend.seen.borrow();
    let ending_call = seen
        .iter()
        .find(|(url, _)| url.contains("gemini-3-pro-preview"))
        .expect("ending writer was called");
    let prompt = ending_call.1["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap();
    assert!(prompt.contains("COMPLETED"));
    assert!(prompt.contains("永遠に解けないパズル"));
}

#[test]
fn exhausted_retries_surface_the_transport_error() {
    let backend = RoutedBackend::default();
    *backend.flaky_judge.borrow_mut() = 10;
    let config = OracleConfig::default().with_retry(RetryPolicy {
        retries: 1,
        initial_delay_ms: 10,
    });
    let oracle = GeminiOracle::new(backend, "test-key", config);
    let mut run = VoidRun::new(oracle, Difficulty::Normal);

    let err = block_on(run.purchase("pen")).unwrap_err();
    assert!(!err.is_key_rejected());
    assert!(run.state().history.is_empty());
    assert_eq!(*run.oracle().backend().flaky_judge.borrow(), 8);
}
