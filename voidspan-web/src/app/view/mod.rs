mod handlers;
mod phases;

pub use handlers::AppHandlers;

use crate::app::phase::ending_ready;
use crate::app::state::AppState;
use crate::components::ui::debug_panel::DebugPanel;
use crate::components::ui::ending_screen::EndingScreen;
use crate::components::ui::image_lightbox::ImageLightbox;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state);
    let main_view = phases::render_main_view(state, &handlers, route, navigator);
    let game = &*state.game;
    let in_run = !matches!(game.status, crate::game::GameStatus::Start);

    let ending = game
        .ending
        .clone()
        .filter(|_| ending_ready(game))
        .map_or_else(Html::default, |ending| {
            html! {
                <EndingScreen
                    {ending}
                    status={game.status}
                    history={game.history.clone()}
                    on_restart={handlers.reset.clone()}
                    on_open_image={handlers.open_image.clone()}
                />
            }
        });

    let lightbox = (*state.selected_image).clone().map_or_else(Html::default, |src| {
        html! { <ImageLightbox {src} on_close={handlers.close_image.clone()} /> }
    });

    let debug = if *state.show_debug {
        html! { <DebugPanel state={game.clone()} on_close={handlers.toggle_debug.clone()} /> }
    } else {
        Html::default()
    };

    html! {
        <>
            <crate::components::header::Header
                on_lang_change={handlers.lang_change.clone()}
                current_lang={(*state.current_language).clone()}
                on_give_up={in_run.then(|| handlers.reset.clone())}
                on_toggle_key={in_run.then(|| handlers.toggle_key_panel.clone())}
                difficulty={game.difficulty.filter(|_| in_run)}
            />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                <div id={crate::a11y::STATUS_REGION_ID} class="sr-only" role="status" aria-live="polite"></div>
                { main_view }
                <crate::components::footer::Footer />
            </main>
            { debug }
            { lightbox }
            { ending }
        </>
    }
}
