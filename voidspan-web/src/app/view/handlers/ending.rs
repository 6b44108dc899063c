use crate::app::state::AppState;
use crate::game::constants::ENDING_DELAY_MS;
use crate::game::{ApiError, EndingResult, GameState, resolve_ending};
use gloo::timers::future::TimeoutFuture;

/// Write the ending for a finished run after a short pause.
///
/// The result is installed only if `run` is still the current run.
pub fn schedule_ending(app: AppState, finished: GameState, run: u64) {
    yew::platform::spawn_local(async move {
        TimeoutFuture::new(ENDING_DELAY_MS).await;
        if !begin_ending(&app, run) {
            return;
        }
        let oracle = crate::game::web_oracle();
        let result = resolve_ending(&oracle, &finished).await;
        install_ending(&app, finished, result, run);
    });
}

/// Show the ending loader; false when the run was abandoned during the pause.
pub fn begin_ending(app: &AppState, run: u64) -> bool {
    if !app.is_current_run(run) {
        return false;
    }
    app.ending_loading.set(true);
    crate::a11y::set_status(&crate::i18n::t("ending.loading"));
    true
}

/// Attach the written ending, or the fallback when writing failed.
///
/// Returns the installed state, or `None` for an abandoned run.
pub fn install_ending(
    app: &AppState,
    finished: GameState,
    result: Result<EndingResult, ApiError>,
    run: u64,
) -> Option<GameState> {
    let ending = result.unwrap_or_else(|err| {
        log::error!("ending generation failed: {err}");
        crate::dom::console_error(&format!("Ending Generation Error: {err}"));
        if err.is_key_rejected() {
            super::keys::mark_key_rejected(app);
        }
        EndingResult::fallback()
    });
    if !app.is_current_run(run) {
        return None;
    }
    let mut next = finished;
    next.set_ending(ending);
    app.game.set(next.clone());
    app.ending_loading.set(false);
    Some(next)
}
