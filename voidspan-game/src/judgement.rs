//! The model's verdict on a single purchase.
use serde::{Deserialize, Deserializer, Serialize};
use std::hash::Hasher;
use twox_hash::XxHash64;

use crate::numbers::{round_f64_to_i32, round_f64_to_i64};
use crate::state::HistoryItem;

/// JSON object returned by the item judge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemJudgement {
    pub cost: f64,
    /// Digits only by contract, but models sometimes add separators or units.
    #[serde(deserialize_with = "years_text")]
    pub time_killed_years: String,
    pub sanity_change: f64,
    pub story: String,
    pub synergy_analysis: String,
}

impl ItemJudgement {
    #[must_use]
    pub fn cost_yen(&self) -> i64 {
        round_f64_to_i64(self.cost)
    }

    #[must_use]
    pub fn years(&self) -> u64 {
        parse_years(&self.time_killed_years)
    }

    #[must_use]
    pub fn sanity_delta(&self) -> i32 {
        round_f64_to_i32(self.sanity_change)
    }

    #[must_use]
    pub fn into_history_item(self, id: String, item_name: &str, image_url: String) -> HistoryItem {
        HistoryItem {
            id,
            item_name: item_name.to_string(),
            cost: self.cost_yen(),
            time_killed: self.years(),
            sanity_change: self.sanity_delta(),
            story: self.story,
            image_url,
            synergy_analysis: self.synergy_analysis,
        }
    }
}

/// Keep the ASCII digits of `text` and read them as years.
///
/// Empty input reads as zero; values beyond `u64` saturate.
#[must_use]
pub fn parse_years(text: &str) -> u64 {
    text.bytes()
        .filter(u8::is_ascii_digit)
        .fold(0_u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit - b'0'))
        })
}

/// Stable identifier for the `turn`-th purchase of `item_name`.
#[must_use]
pub fn entry_id(turn: usize, item_name: &str) -> String {
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(&turn.to_le_bytes());
    hasher.write(item_name.as_bytes());
    format!("{:016x}", hasher.finish())
}

fn years_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Whole(u64),
        Real(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Whole(n) => n.to_string(),
        Raw::Real(n) => format!("{}", n.max(0.0).trunc()),
    })
}
