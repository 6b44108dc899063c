//! One real purchase against Gemini.
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use colored::Colorize;
use reqwest::header::CONTENT_TYPE;
use std::io::Write;
use std::time::Duration;

use voidspan_game::constants::GEMINI_KEY_HEADER;
use voidspan_game::{
    ApiError, Difficulty, GeminiOracle, HistoryItem, HttpBackend, HttpReply, OracleConfig,
    VoidRun, group_digits, loading_message, mask_api_key,
};

use crate::logic::{RunSummary, single_purchase};
use crate::logic::scenarios::CheckFailure;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// reqwest client with tokio timers for retry back-off.
#[derive(Debug, Default, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
}

#[async_trait(?Send)]
impl HttpBackend for ReqwestBackend {
    async fn post_json(&self, url: &str, api_key: &str, body: &str) -> Result<HttpReply, ApiError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(GEMINI_KEY_HEADER, api_key)
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(HttpReply { status, body })
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Shorten inline `data:` URLs so the terminal is not flooded with base64.
fn display_url(url: &str) -> String {
    const KEEP: usize = 48;
    if url.starts_with("data:") && url.len() > KEEP {
        let head: String = url.chars().take(KEEP).collect();
        format!("{head}... ({} bytes)", url.len())
    } else {
        url.to_string()
    }
}

fn write_judgement(out: &mut dyn Write, item: &HistoryItem) -> Result<()> {
    writeln!(out, "{}", format!("🛒 {}", item.item_name).bold())?;
    writeln!(out, "   Cost: ¥{}", group_digits(i128::from(item.cost)))?;
    writeln!(
        out,
        "   Years killed: {}",
        group_digits(i128::from(item.time_killed))
    )?;
    writeln!(out, "   Sanity: {:+}", item.sanity_change)?;
    writeln!(out, "   Story: {}", item.story)?;
    writeln!(out, "   Synergy: {}", item.synergy_analysis)?;
    writeln!(out, "   Image: {}", display_url(&item.image_url))?;
    Ok(())
}

/// Buy `item` with the key from the environment and print the verdict.
pub async fn run_live(
    out: &mut dyn Write,
    item: &str,
    difficulty: Difficulty,
) -> Result<RunSummary> {
    let api_key = std::env::var(API_KEY_ENV)
        .with_context(|| format!("{API_KEY_ENV} must be set for live mode"))?;
    if api_key.trim().is_empty() {
        bail!("{API_KEY_ENV} is empty");
    }
    writeln!(
        out,
        "🔑 Using key {} on {} difficulty",
        mask_api_key(&api_key),
        difficulty
    )?;
    writeln!(out, "⏳ {}", loading_message(0))?;
    out.flush()?;

    let oracle = GeminiOracle::new(ReqwestBackend::default(), api_key, OracleConfig::default());
    let mut run = VoidRun::new(oracle, difficulty);
    let summary = match single_purchase(&mut run, item).await {
        Ok(summary) => summary,
        Err(CheckFailure::Purchase(err)) if err.is_key_rejected() => {
            bail!("Gemini rejected the key in {API_KEY_ENV}: {err}");
        }
        Err(err) => return Err(err).context("live purchase failed"),
    };

    if let Some(bought) = run.state().history.last() {
        write_judgement(out, bought)?;
    }
    writeln!(out, "{}", summary.to_string().cyan())?;
    Ok(summary)
}
