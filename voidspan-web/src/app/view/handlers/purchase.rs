use crate::app::state::AppState;
use crate::game::{GameState, HistoryItem, PurchaseError, TurnOutcome, resolve_purchase};
use std::collections::BTreeMap;
use yew::prelude::*;

/// What a judged purchase did to the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseReply {
    /// The run was abandoned while the item was being judged.
    Stale,
    /// The item was applied; `ended` means the ending follows.
    Applied { next: GameState, ended: bool },
    /// Nothing changed.
    Failed { key_rejected: bool },
}

pub fn build_purchase(state: &AppState) -> Callback<String> {
    let app = state.clone();
    Callback::from(move |input: String| {
        if *app.loading || *app.ending_loading {
            return;
        }
        let snapshot = (*app.game).clone();
        if let Err(err) = snapshot.validate_item(&input) {
            log::debug!("purchase ignored: {err}");
            return;
        }
        app.loading.set(true);
        let run = *app.run_id.borrow();
        spawn_purchase(app.clone(), snapshot, input, run);
    })
}

fn spawn_purchase(app: AppState, snapshot: GameState, input: String, run: u64) {
    yew::platform::spawn_local(async move {
        let oracle = crate::game::web_oracle();
        let result = resolve_purchase(&oracle, &snapshot, &input).await;
        if let PurchaseReply::Applied { next, ended: true } =
            apply_purchase_reply(&app, snapshot, result, run)
        {
            super::ending::schedule_ending(app, next, run);
        }
    });
}

/// Fold the judge's reply into the app if `run` is still the current run.
///
/// On failure the game state is left as it was.
pub fn apply_purchase_reply(
    app: &AppState,
    snapshot: GameState,
    result: Result<HistoryItem, PurchaseError>,
    run: u64,
) -> PurchaseReply {
    if !app.is_current_run(run) {
        log::debug!("dropping reply for abandoned run {run}");
        return PurchaseReply::Stale;
    }
    app.loading.set(false);
    let item = match result {
        Ok(item) => item,
        Err(err) => {
            report_failure(app, &err);
            return PurchaseReply::Failed {
                key_rejected: err.is_key_rejected(),
            };
        }
    };
    let item_name = item.item_name.clone();
    let mut next = snapshot;
    match next.apply_purchase(item) {
        Ok(outcome) => {
            announce_purchase(&item_name, &outcome);
            app.game.set(next.clone());
            PurchaseReply::Applied {
                next,
                ended: outcome.ended_run(),
            }
        }
        Err(err) => {
            log::error!("could not apply '{item_name}': {err}");
            PurchaseReply::Failed { key_rejected: false }
        }
    }
}

fn announce_purchase(item_name: &str, outcome: &TurnOutcome) {
    let mut vars = BTreeMap::new();
    vars.insert("item", item_name);
    let purchased = crate::i18n::tr("void.purchased", Some(&vars));
    let years = crate::i18n::fmt_int(i128::from(outcome.years_killed));
    let mut vars = BTreeMap::new();
    vars.insert("years", years.as_str());
    let killed = crate::i18n::tr("stats.years", Some(&vars));
    crate::a11y::set_status(&format!("{purchased} -{killed}"));
}

fn report_failure(app: &AppState, err: &PurchaseError) {
    log::error!("purchase failed: {err}");
    crate::dom::console_error(&format!("API Error: {err}"));
    if err.is_key_rejected() {
        super::keys::mark_key_rejected(app);
    }
    if let PurchaseError::Api(_) = err {
        crate::dom::alert(&crate::i18n::t("void.purchase_failed"));
    }
}
