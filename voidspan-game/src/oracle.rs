//! The seam between the rules and the generative models.
//!
//! [`VoidOracle`] is what a run needs from the outside world. [`GeminiOracle`]
//! implements it on top of any [`HttpBackend`], so the browser and the native
//! tester share everything except the HTTP client and the sleep primitive.
use async_trait::async_trait;
use std::time::Duration;

use crate::config::OracleConfig;
use crate::constants::{LOG_TARGET_API, PLACEHOLDER_IMAGE_URL};
use crate::difficulty::Difficulty;
use crate::ending::{EndingDraft, EndingResult};
use crate::error::{ApiError, PurchaseError};
use crate::gemini::{
    GenerateContentRequest, GenerateContentResponse, decode_json, endpoint, ending_schema,
    image_request, interpret_reply, item_schema, json_request,
};
use crate::judgement::ItemJudgement;
use crate::prompts::{
    ITEM_JUDGE_INSTRUCTION, ending_image_prompt, ending_prompt, item_evaluation_prompt,
    item_image_prompt,
};
use crate::retry::retry_with;
use crate::state::{GameState, HistoryItem, TurnOutcome};

/// Raw HTTP reply; classification happens in [`interpret_reply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// Platform HTTP client plus the timer used between retries.
#[async_trait(?Send)]
pub trait HttpBackend {
    /// POST `body` (already JSON) with the key in the provider's header.
    ///
    /// Only failures that produce no HTTP status are errors here.
    async fn post_json(&self, url: &str, api_key: &str, body: &str)
    -> Result<HttpReply, ApiError>;

    async fn sleep(&self, duration: Duration);
}

#[async_trait(?Send)]
pub trait VoidOracle {
    async fn evaluate_item(
        &self,
        item_name: &str,
        state: &GameState,
    ) -> Result<ItemJudgement, ApiError>;

    /// Image URL for the item; a placeholder when the model returns no picture.
    async fn generate_item_image(&self, item_name: &str) -> Result<String, ApiError>;

    async fn generate_ending(&self, state: &GameState) -> Result<EndingDraft, ApiError>;

    async fn generate_ending_image(&self, title: &str, victory: bool) -> Result<String, ApiError>;
}

pub struct GeminiOracle<B> {
    backend: B,
    api_key: String,
    config: OracleConfig,
}

impl<B: HttpBackend> GeminiOracle<B> {
    pub fn new(backend: B, api_key: impl Into<String>, config: OracleConfig) -> Self {
        Self {
            backend,
            api_key: api_key.into(),
            config,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    async fn call(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ApiError> {
        let api_key = self.api_key.trim();
        if api_key.is_empty() {
            return Err(ApiError::MissingKey);
        }
        let url = endpoint(&self.config.api_base, model);
        let body = serde_json::to_string(request)?;
        let backend = &self.backend;
        let (url, body) = (url.as_str(), body.as_str());

        log::debug!(target: LOG_TARGET_API, "calling {model}");
        retry_with(
            self.config.retry,
            move |delay| backend.sleep(delay),
            move || async move {
                let reply = backend.post_json(url, api_key, body).await?;
                interpret_reply(reply.status, &reply.body)
            },
        )
        .await
    }

    async fn image(&self, prompt: &str) -> Result<String, ApiError> {
        let reply = self
            .call(&self.config.image_model, &image_request(prompt))
            .await?;
        Ok(reply.image_data_url().unwrap_or_else(|| {
            log::debug!(target: LOG_TARGET_API, "no inline image in reply, using placeholder");
            PLACEHOLDER_IMAGE_URL.to_string()
        }))
    }
}

#[async_trait(?Send)]
impl<B: HttpBackend> VoidOracle for GeminiOracle<B> {
    async fn evaluate_item(
        &self,
        item_name: &str,
        state: &GameState,
    ) -> Result<ItemJudgement, ApiError> {
        let prompt = item_evaluation_prompt(item_name, state.remaining_money, &state.history);
        let request = json_request(&prompt, Some(ITEM_JUDGE_INSTRUCTION), item_schema());
        let reply = self.call(&self.config.item_model, &request).await?;
        decode_json(&reply.text())
    }

    async fn generate_item_image(&self, item_name: &str) -> Result<String, ApiError> {
        self.image(&item_image_prompt(item_name)).await
    }

    async fn generate_ending(&self, state: &GameState) -> Result<EndingDraft, ApiError> {
        let request = json_request(&ending_prompt(state), None, ending_schema());
        let reply = self.call(&self.config.ending_model, &request).await?;
        decode_json(&reply.text())
    }

    async fn generate_ending_image(&self, title: &str, victory: bool) -> Result<String, ApiError> {
        self.image(&ending_image_prompt(title, victory)).await
    }
}

/// Judge `input` and draw it at the same time; nothing is applied to `state`.
///
/// # Errors
///
/// Fails with [`PurchaseError::Turn`] before any call when the input or run
/// state is unusable, and with [`PurchaseError::Api`] when either call fails.
pub async fn resolve_purchase<O: VoidOracle + ?Sized>(
    oracle: &O,
    state: &GameState,
    input: &str,
) -> Result<HistoryItem, PurchaseError> {
    let item_name = state.validate_item(input)?;
    let (judgement, image_url) = futures::future::try_join(
        oracle.evaluate_item(&item_name, state),
        oracle.generate_item_image(&item_name),
    )
    .await?;
    Ok(judgement.into_history_item(state.next_entry_id(&item_name), &item_name, image_url))
}

/// Ending text first, then an illustration matching its title.
///
/// # Errors
///
/// Returns the first [`ApiError`] from either call.
pub async fn resolve_ending<O: VoidOracle + ?Sized>(
    oracle: &O,
    state: &GameState,
) -> Result<EndingResult, ApiError> {
    let draft = oracle.generate_ending(state).await?;
    let image_url = oracle
        .generate_ending_image(&draft.title, state.is_victory())
        .await?;
    Ok(EndingResult::from_draft(draft, image_url))
}

/// A run bound to an oracle.
pub struct VoidRun<O> {
    oracle: O,
    state: GameState,
}

impl<O: VoidOracle> VoidRun<O> {
    pub fn new(oracle: O, difficulty: Difficulty) -> Self {
        Self {
            oracle,
            state: GameState::start(difficulty),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Resolve and apply one purchase.
    ///
    /// # Errors
    ///
    /// On any error the state is left exactly as it was.
    pub async fn purchase(&mut self, input: &str) -> Result<TurnOutcome, PurchaseError> {
        let item = match resolve_purchase(&self.oracle, &self.state, input).await {
            Ok(item) => item,
            Err(err) => {
                log::error!(target: LOG_TARGET_API, "purchase of '{}' failed: {err}", input.trim());
                return Err(err);
            }
        };
        Ok(self.state.apply_purchase(item)?)
    }

    /// Install the ending for a finished run, falling back when the models fail.
    ///
    /// Returns `None` while the run is still going.
    pub async fn conclude(&mut self) -> Option<&EndingResult> {
        if !self.state.is_game_over() {
            return None;
        }
        let ending = match resolve_ending(&self.oracle, &self.state).await {
            Ok(ending) => ending,
            Err(err) => {
                log::error!(target: LOG_TARGET_API, "ending generation failed: {err}");
                EndingResult::fallback()
            }
        };
        self.state.set_ending(ending);
        self.state.ending.as_ref()
    }
}
