use crate::game::{GameState, GameStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Difficulty choice and key setup.
    Start,
    /// The run itself, including the ending overlay once it is over.
    Void,
}

#[must_use]
pub const fn phase_for_state(state: &GameState) -> Phase {
    match state.status {
        GameStatus::Start => Phase::Start,
        GameStatus::Playing
        | GameStatus::LostSanity
        | GameStatus::Bankrupt
        | GameStatus::Completed => Phase::Void,
    }
}

/// Whether the purchase form should be offered.
#[must_use]
pub const fn purchase_open(state: &GameState, ending_loading: bool) -> bool {
    !state.is_game_over() && !ending_loading
}

/// Whether the ending overlay has something to show.
#[must_use]
pub const fn ending_ready(state: &GameState) -> bool {
    state.is_game_over() && state.ending.is_some()
}
