use crate::app::state::AppState;
use crate::i18n::t;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn render_not_found(state: &AppState, navigator: Option<Navigator>) -> Html {
    let back = {
        let phase = *state.phase;
        Callback::from(move |_| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::from_phase(&phase));
            }
        })
    };
    html! {
        <section class="panel not-found" aria-labelledby="not-found-title">
            <h2 id="not-found-title">{ t("not_found.title") }</h2>
            <button class="retro-btn-primary" onclick={back}>{ t("not_found.back") }</button>
        </section>
    }
}
