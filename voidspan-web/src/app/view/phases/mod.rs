mod not_found;
mod start;
mod void;

use crate::app::phase::Phase;
use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub use not_found::render_not_found;
pub use start::render_start;
pub use void::render_void;

pub fn render_main_view(
    state: &AppState,
    handlers: &AppHandlers,
    route: Option<&Route>,
    navigator: Option<Navigator>,
) -> Html {
    if matches!(route, Some(Route::NotFound)) {
        return render_not_found(state, navigator);
    }

    match *state.phase {
        Phase::Start => render_start(state, handlers),
        Phase::Void => render_void(state, handlers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Difficulty, GameState, HistoryItem};
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[derive(Properties, Clone, PartialEq)]
    struct PhaseHarnessProps {
        phase: Phase,
        game: GameState,
        #[prop_or_default]
        route: Option<Route>,
        #[prop_or_default]
        loading: bool,
        #[prop_or_default]
        ending_loading: bool,
        #[prop_or_default]
        key_mask: Option<String>,
        #[prop_or_default]
        key_rejected: bool,
    }

    #[function_component(PhaseHarness)]
    fn phase_harness(props: &PhaseHarnessProps) -> Html {
        crate::i18n::set_lang("en");
        let app_state = AppState {
            phase: use_state(|| props.phase),
            game: use_state(|| props.game.clone()),
            loading: use_state(|| props.loading),
            ending_loading: use_state(|| props.ending_loading),
            key_mask: use_state(|| props.key_mask.clone()),
            key_rejected: use_state(|| props.key_rejected),
            show_key_panel: use_state(|| false),
            selected_image: use_state(|| None::<AttrValue>),
            show_debug: use_state(|| false),
            current_language: use_state(|| String::from("en")),
            run_id: use_mut_ref(|| 1_u64),
        };
        let handlers = AppHandlers::new(&app_state);
        render_main_view(&app_state, &handlers, props.route.as_ref(), None)
    }

    fn render(props: PhaseHarnessProps) -> String {
        block_on(LocalServerRenderer::<PhaseHarness>::with_props(props).render())
    }

    fn purchase(name: &str) -> HistoryItem {
        HistoryItem {
            id: format!("{name}-1"),
            item_name: name.to_string(),
            cost: 12_000,
            time_killed: 3_000_000,
            sanity_change: -4,
            story: String::from("It hums quietly."),
            image_url: String::from("https://picsum.photos/800/450"),
            synergy_analysis: String::from("none yet"),
        }
    }

    #[test]
    fn start_screen_offers_difficulties_and_key_form() {
        let html = render(PhaseHarnessProps {
            phase: Phase::Start,
            game: GameState::default(),
            route: None,
            loading: false,
            ending_loading: false,
            key_mask: None,
            key_rejected: false,
        });
        for key in ["chicken", "easy", "normal"] {
            assert!(html.contains(&format!("difficulty-{key}")), "{key}: {html}");
        }
        assert!(html.contains("¥100,000,000,000,000"), "{html}");
        assert!(html.contains("api-key-input"), "{html}");
        assert!(html.contains("Set a Gemini API key to play."), "{html}");
    }

    #[test]
    fn start_screen_masks_a_stored_key() {
        let html = render(PhaseHarnessProps {
            phase: Phase::Start,
            game: GameState::default(),
            route: None,
            loading: false,
            ending_loading: false,
            key_mask: Some(String::from("AIzaSyA1...WXYZ")),
            key_rejected: false,
        });
        assert!(html.contains("AIzaSyA1...WXYZ"), "{html}");
        assert!(html.contains("clear-key-btn"), "{html}");
        assert!(!html.contains("api-key-input"), "{html}");
    }

    #[test]
    fn empty_void_shows_placeholder_and_form() {
        let html = render(PhaseHarnessProps {
            phase: Phase::Void,
            game: GameState::start(Difficulty::Normal),
            route: None,
            loading: false,
            ending_loading: false,
            key_mask: Some(String::from("AIzaSyA1...WXYZ")),
            key_rejected: false,
        });
        assert!(html.contains("The void stretches out."), "{html}");
        assert!(html.contains("purchase-input"), "{html}");
        assert!(html.contains("500,000,000 years"), "{html}");
    }

    #[test]
    fn void_feed_lists_purchases_and_loading() {
        let mut game = GameState::start(Difficulty::Easy);
        game.history.push(purchase("rubber duck"));
        let html = render(PhaseHarnessProps {
            phase: Phase::Void,
            game,
            route: None,
            loading: true,
            ending_loading: false,
            key_mask: Some(String::from("AIzaSyA1...WXYZ")),
            key_rejected: false,
        });
        assert!(html.contains("rubber duck"), "{html}");
        assert!(html.contains("-¥12,000"), "{html}");
        assert!(html.contains("3,000,000 years"), "{html}");
        assert!(html.contains("-4%"), "{html}");
        assert!(html.contains("Judging..."), "{html}");
        assert!(!html.contains("The void stretches out."), "{html}");
    }

    #[test]
    fn finished_run_hides_form_and_shows_ending_loader() {
        let mut game = GameState::start(Difficulty::Normal);
        game.status = crate::game::GameStatus::Bankrupt;
        let html = render(PhaseHarnessProps {
            phase: Phase::Void,
            game,
            route: None,
            loading: false,
            ending_loading: true,
            key_mask: Some(String::from("AIzaSyA1...WXYZ")),
            key_rejected: true,
        });
        assert!(!html.contains("purchase-input"), "{html}");
        assert!(html.contains("Sealing your fate..."), "{html}");
        assert!(html.contains("not recognised"), "rejected key reopens the panel: {html}");
    }

    #[test]
    fn keyless_call_asks_for_a_key_instead_of_blaming_it() {
        let html = render(PhaseHarnessProps {
            phase: Phase::Void,
            game: GameState::start(Difficulty::Normal),
            route: None,
            loading: false,
            ending_loading: false,
            key_mask: None,
            key_rejected: true,
        });
        assert!(html.contains("No API key configured."), "{html}");
        assert!(!html.contains("not recognised"), "{html}");
        assert!(html.contains("api-key-input"), "{html}");
    }

    #[test]
    fn not_found_route_renders_back_link() {
        let html = render(PhaseHarnessProps {
            phase: Phase::Start,
            game: GameState::default(),
            route: Some(Route::NotFound),
            loading: false,
            ending_loading: false,
            key_mask: None,
            key_rejected: false,
        });
        assert!(html.contains("Not even the void is here."), "{html}");
    }
}
