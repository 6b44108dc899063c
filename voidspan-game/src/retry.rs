//! Bounded exponential backoff around provider calls.
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

use crate::constants::{LOG_TARGET_API, RETRY_ATTEMPTS, RETRY_INITIAL_DELAY_MS};
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Extra attempts after the first one.
    pub retries: u32,
    /// Wait before the first retry; doubled after each one.
    pub initial_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: RETRY_ATTEMPTS,
            initial_delay_ms: RETRY_INITIAL_DELAY_MS,
        }
    }
}

impl RetryPolicy {
    /// Single attempt, no waiting.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            retries: 0,
            initial_delay_ms: 0,
        }
    }

    /// Wait before retry number `retry` (zero-based).
    #[must_use]
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 1_u64.checked_shl(retry).unwrap_or(u64::MAX);
        Duration::from_millis(self.initial_delay_ms.saturating_mul(factor))
    }
}

/// Run `op` until it succeeds, fails with a non-retryable error, or the policy is exhausted.
///
/// `sleep` is supplied by the platform so the same loop runs on tokio and on browser timers.
///
/// # Errors
///
/// Returns the last [`ApiError`] produced by `op`.
pub async fn retry_with<T, Op, Fut, Sl, SlFut>(
    policy: RetryPolicy,
    mut sleep: Sl,
    mut op: Op,
) -> Result<T, ApiError>
where
    Op: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
    Sl: FnMut(Duration) -> SlFut,
    SlFut: Future<Output = ()>,
{
    let mut retry = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if retry < policy.retries && err.is_retryable() => {
                let delay = policy.delay_for(retry);
                let left = policy.retries - retry;
                log::warn!(
                    target: LOG_TARGET_API,
                    "API error encountered ({err}). Retrying in {}ms... ({left} retries left)",
                    delay.as_millis()
                );
                sleep(delay).await;
                retry += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
