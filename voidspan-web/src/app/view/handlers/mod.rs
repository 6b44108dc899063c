mod ending;
mod keys;
mod prefs;
mod purchase;
mod run;

use crate::app::state::AppState;
use crate::game::Difficulty;
use yew::prelude::*;

pub use keys::{build_clear_key, build_save_key, build_toggle_key_panel};
pub use prefs::{build_close_image, build_lang_change, build_open_image, build_toggle_debug};
pub use purchase::build_purchase;
pub use run::{build_reset, build_start};

#[derive(Clone)]
pub struct AppHandlers {
    pub start: Callback<Difficulty>,
    pub reset: Callback<()>,
    pub purchase: Callback<String>,
    pub save_key: Callback<String>,
    pub clear_key: Callback<()>,
    pub toggle_key_panel: Callback<()>,
    pub lang_change: Callback<String>,
    pub toggle_debug: Callback<()>,
    pub open_image: Callback<AttrValue>,
    pub close_image: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            start: build_start(state),
            reset: build_reset(state),
            purchase: build_purchase(state),
            save_key: build_save_key(state),
            clear_key: build_clear_key(state),
            toggle_key_panel: build_toggle_key_panel(state),
            lang_change: build_lang_change(state),
            toggle_debug: build_toggle_debug(state),
            open_image: build_open_image(state),
            close_image: build_close_image(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::phase::Phase;
    use crate::game::{ApiError, EndingResult, GameState, GameStatus, HistoryItem, PurchaseError};
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[hook]
    fn use_test_state(game: GameState, loading: bool) -> AppState {
        AppState {
            phase: use_state(|| Phase::Start),
            game: use_state(move || game),
            loading: use_state(move || loading),
            ending_loading: use_state(|| false),
            key_mask: use_state(|| Some(String::from("AIzaSyA1...WXYZ"))),
            key_rejected: use_state(|| false),
            show_key_panel: use_state(|| false),
            selected_image: use_state(|| None::<AttrValue>),
            show_debug: use_state(|| false),
            current_language: use_state(|| String::from("en")),
            run_id: use_mut_ref(|| 0_u64),
        }
    }

    #[function_component(StartHandlersHarness)]
    fn start_handlers_harness() -> Html {
        crate::i18n::set_lang("en");
        let invoked = use_state(|| false);
        let app_state = use_test_state(GameState::default(), false);
        let handlers = AppHandlers::new(&app_state);

        if !*invoked {
            invoked.set(true);
            handlers.start.emit(Difficulty::Easy);
            assert_eq!(*app_state.run_id.borrow(), 1);
            // Not started yet in this render: ignored without touching the oracle.
            handlers.purchase.emit(String::from("pen"));
            handlers.purchase.emit(String::from("   "));
            handlers.lang_change.emit(String::from("ja"));
            handlers.lang_change.emit(String::from("xx"));
            handlers.toggle_debug.emit(());
            handlers.open_image.emit(AttrValue::from("https://picsum.photos/800/450"));
            handlers.close_image.emit(());
            handlers.save_key.emit(String::from("   "));
            handlers.save_key.emit(String::from("AIzaSyA1234567890abcdWXYZ"));
            handlers.toggle_key_panel.emit(());
            handlers.clear_key.emit(());
            handlers.reset.emit(());
            assert_eq!(*app_state.run_id.borrow(), 2);
            crate::i18n::set_lang("en");
        }
        Html::default()
    }

    #[function_component(BusyHandlersHarness)]
    fn busy_handlers_harness() -> Html {
        let invoked = use_state(|| false);
        let app_state = use_test_state(GameState::start(Difficulty::Normal), true);
        let handlers = AppHandlers::new(&app_state);
        if !*invoked {
            invoked.set(true);
            // A purchase is already in flight.
            handlers.purchase.emit(String::from("pen"));
            assert!(app_state.is_current_run(0));
            assert_eq!(app_state.game.status, GameStatus::Playing);
        }
        Html::default()
    }

    fn judged(name: &str, cost: i64) -> HistoryItem {
        HistoryItem {
            id: format!("{name}-1"),
            item_name: name.to_string(),
            cost,
            time_killed: 1_000,
            sanity_change: -1,
            story: String::from("It passes the time."),
            image_url: String::from("https://picsum.photos/800/450"),
            synergy_analysis: String::new(),
        }
    }

    fn refused_key() -> PurchaseError {
        PurchaseError::Api(ApiError::Status {
            code: 400,
            message: String::from("Requested entity was not found."),
        })
    }

    #[function_component(StaleReplyHarness)]
    fn stale_reply_harness() -> Html {
        let invoked = use_state(|| false);
        let app_state = use_test_state(GameState::start(Difficulty::Normal), true);
        if !*invoked {
            invoked.set(true);
            let snapshot = (*app_state.game).clone();
            // The player gave up while the item was being judged.
            assert_eq!(app_state.next_run(), 1);
            let reply = purchase::apply_purchase_reply(
                &app_state,
                snapshot.clone(),
                Ok(judged("pen", 100)),
                0,
            );
            assert_eq!(reply, purchase::PurchaseReply::Stale);
            let reply =
                purchase::apply_purchase_reply(&app_state, snapshot.clone(), Err(refused_key()), 0);
            assert_eq!(reply, purchase::PurchaseReply::Stale);
            assert_eq!(ending::install_ending(&app_state, snapshot, Ok(EndingResult::fallback()), 0), None);
            assert!(!ending::begin_ending(&app_state, 0));
            assert!(app_state.is_current_run(1));
        }
        Html::default()
    }

    #[function_component(FailedReplyHarness)]
    fn failed_reply_harness() -> Html {
        let invoked = use_state(|| false);
        let app_state = use_test_state(GameState::start(Difficulty::Normal), true);
        if !*invoked {
            invoked.set(true);
            let snapshot = (*app_state.game).clone();
            let reply =
                purchase::apply_purchase_reply(&app_state, snapshot.clone(), Err(refused_key()), 0);
            assert_eq!(reply, purchase::PurchaseReply::Failed { key_rejected: true });
            let offline = PurchaseError::Api(ApiError::Transport(String::from("offline")));
            let reply = purchase::apply_purchase_reply(&app_state, snapshot.clone(), Err(offline), 0);
            assert_eq!(reply, purchase::PurchaseReply::Failed { key_rejected: false });
            // A finished run refuses the item without touching the state.
            let mut over = snapshot;
            over.status = GameStatus::Bankrupt;
            let reply = purchase::apply_purchase_reply(&app_state, over, Ok(judged("pen", 100)), 0);
            assert_eq!(reply, purchase::PurchaseReply::Failed { key_rejected: false });
            assert_eq!(app_state.game.history.len(), 0);
        }
        Html::default()
    }

    #[function_component(TerminalReplyHarness)]
    fn terminal_reply_harness() -> Html {
        let invoked = use_state(|| false);
        let app_state = use_test_state(GameState::start(Difficulty::Normal), true);
        if !*invoked {
            invoked.set(true);
            let snapshot = (*app_state.game).clone();
            let reply =
                purchase::apply_purchase_reply(&app_state, snapshot.clone(), Ok(judged("pen", 100)), 0);
            let purchase::PurchaseReply::Applied { next, ended } = reply else {
                panic!("cheap item should apply");
            };
            assert!(!ended);
            assert_eq!(next.history.len(), 1);
            assert_eq!(next.remaining_money, 999_900);

            let reply = purchase::apply_purchase_reply(
                &app_state,
                snapshot,
                Ok(judged("private island", 2_000_000)),
                0,
            );
            let purchase::PurchaseReply::Applied { next: finished, ended } = reply else {
                panic!("ruinous item should still apply");
            };
            assert!(ended, "bankruptcy hands over to the ending");
            assert_eq!(finished.status, GameStatus::Bankrupt);

            assert!(ending::begin_ending(&app_state, 0));
            let shown = ending::install_ending(&app_state, finished, Err(ApiError::MissingKey), 0)
                .expect("current run installs its ending");
            assert_eq!(shown.ending, Some(EndingResult::fallback()));
            assert_eq!(shown.status, GameStatus::Bankrupt);
        }
        Html::default()
    }

    #[test]
    fn stale_replies_change_nothing() {
        let _ = block_on(LocalServerRenderer::<StaleReplyHarness>::new().render());
    }

    #[test]
    fn failed_replies_leave_the_run_untouched() {
        crate::i18n::set_lang("en");
        let _ = block_on(LocalServerRenderer::<FailedReplyHarness>::new().render());
    }

    #[test]
    fn terminal_purchase_hands_over_to_the_ending() {
        crate::i18n::set_lang("en");
        let _ = block_on(LocalServerRenderer::<TerminalReplyHarness>::new().render());
    }

    #[test]
    fn missing_key_is_not_reported_as_rejected() {
        assert_eq!(keys::key_problem(true), "key.rejected");
        assert_eq!(keys::key_problem(false), "key.missing");
    }

    #[test]
    fn handlers_cover_start_paths() {
        let _ = block_on(LocalServerRenderer::<StartHandlersHarness>::new().render());
    }

    #[test]
    fn handlers_ignore_purchases_while_busy() {
        let _ = block_on(LocalServerRenderer::<BusyHandlersHarness>::new().render());
    }
}
