use crate::app::phase::Phase;
use crate::app::state::AppState;
use crate::game::{Difficulty, GameState};
use std::collections::BTreeMap;
use yew::prelude::*;

pub fn build_start(state: &AppState) -> Callback<Difficulty> {
    let app = state.clone();
    Callback::from(move |difficulty: Difficulty| {
        app.next_run();
        app.loading.set(false);
        app.ending_loading.set(false);
        app.selected_image.set(None);
        app.game.set(GameState::start(difficulty));
        app.phase.set(Phase::Void);

        let label = difficulty.label().to_string();
        let mut vars = BTreeMap::new();
        vars.insert("difficulty", label.as_str());
        crate::a11y::set_status(&crate::i18n::tr("start.began", Some(&vars)));
        log::info!("run started on {label}");
    })
}

/// Give Up and Restart both land here: back to the difficulty screen.
pub fn build_reset(state: &AppState) -> Callback<()> {
    let app = state.clone();
    Callback::from(move |()| {
        app.next_run();
        let mut game = (*app.game).clone();
        game.reset();
        app.game.set(game);
        app.loading.set(false);
        app.ending_loading.set(false);
        app.selected_image.set(None);
        app.phase.set(Phase::Start);
    })
}
