//! Deterministic stand-in for the Gemini judge.
//!
//! Mirrors the shape of the real prompt rules: costs scale with the money
//! left, years inflate as the history grows, and items that skip or nest the
//! void freeze time and break the player's mind.
use async_trait::async_trait;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cell::RefCell;

use voidspan_game::numbers::i64_to_f64;
use voidspan_game::{
    ApiError, EndingDraft, GameState, GameStatus, ItemJudgement, VoidOracle,
};

/// Items the judge treats as an attempt to escape the void.
pub const FORBIDDEN_ITEMS: [&str; 4] = ["5億年ボタン", "2億年ボタン", "タイムマシン", "time machine"];

/// Everyday purchases the scenarios pick from.
pub const ITEM_POOL: [&str; 8] = [
    "ボールペン",
    "ルービックキューブ",
    "将棋盤",
    "百科事典",
    "ギター",
    "粘土",
    "望遠鏡",
    "ジグソーパズル",
];

const BASE_YEARS: std::ops::RangeInclusive<u64> = 10_000_000..=30_000_000;

#[must_use]
pub fn is_forbidden(item_name: &str) -> bool {
    let lowered = item_name.to_lowercase();
    FORBIDDEN_ITEMS.iter().any(|f| lowered.contains(f))
}

/// Year multiplier range, in tenths, for the purchase at index `turn`.
const fn tier_bonus(turn: usize) -> (u64, u64) {
    match turn {
        0..=3 => (10, 10),
        4..=7 => (15, 20),
        _ => (20, 30),
    }
}

pub struct ScriptedOracle {
    rng: RefCell<ChaCha8Rng>,
    /// Share of the remaining money each purchase costs.
    cost_share: (f64, f64),
    fail_endings: bool,
}

impl ScriptedOracle {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
            cost_share: (0.01, 0.1),
            fail_endings: false,
        }
    }

    /// Every purchase costs more than the whole wallet.
    #[must_use]
    pub const fn spendthrift(mut self) -> Self {
        self.cost_share = (1.2, 1.5);
        self
    }

    /// The ending writer is unreachable.
    #[must_use]
    pub const fn failing_endings(mut self) -> Self {
        self.fail_endings = true;
        self
    }

    /// Pick an everyday item name.
    pub fn pick_item(&self) -> &'static str {
        let idx = self.rng.borrow_mut().gen_range(0..ITEM_POOL.len());
        ITEM_POOL[idx]
    }

    fn judge(&self, item_name: &str, state: &GameState) -> ItemJudgement {
        let mut rng = self.rng.borrow_mut();
        let share = rng.gen_range(self.cost_share.0..=self.cost_share.1);
        let cost = (i64_to_f64(state.remaining_money.max(0)) * share).round();

        if is_forbidden(item_name) {
            return ItemJudgement {
                cost,
                time_killed_years: "0".to_string(),
                sanity_change: -100.0,
                story: format!("{item_name}で虚無の理を冒涜し、無限の絶望に飲み込まれた。"),
                synergy_analysis: "なし".to_string(),
            };
        }

        let (low, high) = tier_bonus(state.turn());
        let years = rng.gen_range(BASE_YEARS) / 10 * rng.gen_range(low..=high);
        let sanity = rng.gen_range(-3_i32..=3);
        let synergy = state.history.last().map_or_else(
            || "なし".to_string(),
            |prev| format!("{}と相性が良い", prev.item_name),
        );
        ItemJudgement {
            cost,
            time_killed_years: years.to_string(),
            sanity_change: f64::from(sanity),
            story: format!("{item_name}で{years}年を潰した。"),
            synergy_analysis: synergy,
        }
    }
}

fn scripted_grade(state: &GameState) -> &'static str {
    match state.status {
        GameStatus::Completed if state.sanity > 50 => "S",
        GameStatus::Completed => "A",
        GameStatus::Bankrupt => "C",
        _ => "D",
    }
}

#[async_trait(?Send)]
impl VoidOracle for ScriptedOracle {
    async fn evaluate_item(
        &self,
        item_name: &str,
        state: &GameState,
    ) -> Result<ItemJudgement, ApiError> {
        Ok(self.judge(item_name, state))
    }

    async fn generate_item_image(&self, item_name: &str) -> Result<String, ApiError> {
        Ok(format!("scripted://item/{item_name}"))
    }

    async fn generate_ending(&self, state: &GameState) -> Result<EndingDraft, ApiError> {
        if self.fail_endings {
            return Err(ApiError::Transport("ending writer offline".into()));
        }
        let title = if state.is_victory() {
            "虚空の踏破"
        } else {
            "途絶えた意識"
        };
        Ok(EndingDraft {
            title: title.to_string(),
            story: format!("{}個のアイテムと共に虚空を過ごした。", state.turn()),
            evaluation: state.status.to_string(),
            score_grade: scripted_grade(state).to_string(),
        })
    }

    async fn generate_ending_image(&self, title: &str, victory: bool) -> Result<String, ApiError> {
        Ok(format!("scripted://ending/{title}?victory={victory}"))
    }
}
