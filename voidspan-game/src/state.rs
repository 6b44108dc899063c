use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    INITIAL_SANITY, INITIAL_TIME_YEARS, LOG_TARGET_TURN, SANITY_FLOOR, SANITY_STABLE_ABOVE,
    SANITY_STRAINED_ABOVE,
};
use crate::difficulty::Difficulty;
use crate::ending::EndingResult;
use crate::error::TurnError;
use crate::judgement::entry_id;
use crate::numbers::{i64_to_f64, ratio_pct, u64_to_f64};

/// Where the run stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Difficulty not chosen yet.
    #[default]
    Start,
    Playing,
    LostSanity,
    Bankrupt,
    /// All 500 million years are gone.
    Completed,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::LostSanity | Self::Bankrupt | Self::Completed)
    }

    #[must_use]
    pub const fn is_victory(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Wire name, also fed to the ending prompt.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::Playing => "PLAYING",
            Self::LostSanity => "LOST_SANITY",
            Self::Bankrupt => "BANKRUPT",
            Self::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One purchase as it appears in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    pub item_name: String,
    /// Yen.
    pub cost: i64,
    /// Years.
    pub time_killed: u64,
    pub sanity_change: i32,
    pub story: String,
    pub image_url: String,
    pub synergy_analysis: String,
}

/// Colour band of the sanity meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanityBand {
    Stable,
    Strained,
    Critical,
}

impl SanityBand {
    #[must_use]
    pub const fn from_sanity(sanity: i32) -> Self {
        if sanity > SANITY_STABLE_ABOVE {
            Self::Stable
        } else if sanity > SANITY_STRAINED_ABOVE {
            Self::Strained
        } else {
            Self::Critical
        }
    }

    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Stable => "sanity-stable",
            Self::Strained => "sanity-strained",
            Self::Critical => "sanity-critical",
        }
    }
}

/// Summary of a single applied turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub status: GameStatus,
    pub years_killed: u64,
    pub money_spent: i64,
    pub sanity_before: i32,
    pub sanity_after: i32,
}

impl TurnOutcome {
    #[must_use]
    pub const fn ended_run(&self) -> bool {
        self.status.is_terminal()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Years still to get through.
    pub remaining_time: u64,
    /// Yen; may go negative on the turn that bankrupts the player.
    pub remaining_money: i64,
    /// 0..=100.
    pub sanity: i32,
    pub history: Vec<HistoryItem>,
    pub status: GameStatus,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub ending: Option<EndingResult>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            remaining_time: INITIAL_TIME_YEARS,
            remaining_money: 0,
            sanity: INITIAL_SANITY,
            history: Vec::new(),
            status: GameStatus::Start,
            difficulty: None,
            ending: None,
        }
    }
}

impl GameState {
    /// Fresh run funded by the chosen difficulty.
    #[must_use]
    pub fn start(difficulty: Difficulty) -> Self {
        log::debug!(target: LOG_TARGET_TURN, "starting {difficulty} run");
        Self {
            remaining_money: difficulty.starting_money(),
            status: GameStatus::Playing,
            difficulty: Some(difficulty),
            ..Self::default()
        }
    }

    /// Back to the start screen.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub const fn is_victory(&self) -> bool {
        self.status.is_victory()
    }

    /// Number of purchases made so far.
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len()
    }

    /// Trim the player's input and check that a purchase may be made now.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError`] when the input is blank or the run is not in progress.
    pub fn validate_item(&self, input: &str) -> Result<String, TurnError> {
        let item = input.trim();
        if item.is_empty() {
            return Err(TurnError::EmptyItem);
        }
        match self.status {
            GameStatus::Playing => Ok(item.to_string()),
            GameStatus::Start => Err(TurnError::NotStarted),
            GameStatus::LostSanity | GameStatus::Bankrupt | GameStatus::Completed => {
                Err(TurnError::AlreadyOver)
            }
        }
    }

    /// Id the next purchase of `item_name` will carry.
    #[must_use]
    pub fn next_entry_id(&self, item_name: &str) -> String {
        entry_id(self.turn(), item_name)
    }

    /// Apply a judged purchase and decide whether the run continues.
    ///
    /// Time running out wins over everything; otherwise sanity collapse is
    /// checked before bankruptcy.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError`] when no run is in progress.
    pub fn apply_purchase(&mut self, item: HistoryItem) -> Result<TurnOutcome, TurnError> {
        match self.status {
            GameStatus::Playing => {}
            GameStatus::Start => return Err(TurnError::NotStarted),
            _ => return Err(TurnError::AlreadyOver),
        }

        let sanity_before = self.sanity;
        let time_up = item.time_killed >= self.remaining_time;
        let next_time = self.remaining_time.saturating_sub(item.time_killed);
        let next_money = self.remaining_money.saturating_sub(item.cost);
        let next_sanity = sanity_before
            .saturating_add(item.sanity_change)
            .clamp(SANITY_FLOOR, INITIAL_SANITY);

        let status = if time_up {
            GameStatus::Completed
        } else if next_sanity <= SANITY_FLOOR {
            GameStatus::LostSanity
        } else if next_money <= 0 {
            GameStatus::Bankrupt
        } else {
            GameStatus::Playing
        };

        let outcome = TurnOutcome {
            status,
            years_killed: item.time_killed,
            money_spent: item.cost,
            sanity_before,
            sanity_after: next_sanity,
        };

        log::debug!(
            target: LOG_TARGET_TURN,
            "turn {}: '{}' killed {} years for {} yen, sanity {} -> {}, status {}",
            self.turn() + 1,
            item.item_name,
            item.time_killed,
            item.cost,
            sanity_before,
            next_sanity,
            status
        );

        self.remaining_time = next_time;
        self.remaining_money = next_money;
        self.sanity = next_sanity;
        self.status = status;
        self.history.push(item);

        if status.is_terminal() {
            log::info!(
                target: LOG_TARGET_TURN,
                "run ended with {status} after {} purchases",
                self.turn()
            );
        }

        Ok(outcome)
    }

    pub fn set_ending(&mut self, ending: EndingResult) {
        self.ending = Some(ending);
    }

    /// Money the run started with; Normal when no difficulty was chosen.
    #[must_use]
    pub fn initial_money(&self) -> i64 {
        self.difficulty.unwrap_or_default().starting_money()
    }

    /// Share of the 500 million years already gone, 0..=100.
    #[must_use]
    pub fn time_progress_pct(&self) -> f64 {
        100.0
            - ratio_pct(
                u64_to_f64(self.remaining_time),
                u64_to_f64(INITIAL_TIME_YEARS),
            )
    }

    /// Share of the starting budget still left, 0..=100.
    #[must_use]
    pub fn money_pct(&self) -> f64 {
        ratio_pct(
            i64_to_f64(self.remaining_money),
            i64_to_f64(self.initial_money()),
        )
    }

    #[must_use]
    pub const fn sanity_band(&self) -> SanityBand {
        SanityBand::from_sanity(self.sanity)
    }

    #[must_use]
    pub fn total_years_killed(&self) -> u64 {
        self.history
            .iter()
            .fold(0_u64, |acc, h| acc.saturating_add(h.time_killed))
    }

    #[must_use]
    pub fn total_spent(&self) -> i64 {
        self.history
            .iter()
            .fold(0_i64, |acc, h| acc.saturating_add(h.cost))
    }
}
