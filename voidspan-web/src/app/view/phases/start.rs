use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::components::ui::api_key_panel::ApiKeyPanel;
use crate::components::ui::difficulty_select::DifficultySelect;
use crate::i18n::t;
use yew::prelude::*;

pub fn render_start(state: &AppState, handlers: &AppHandlers) -> Html {
    html! {
        <section class="start-screen" data-testid="start-screen">
            <h2 class="start-title glow-text">{ t("app.title") }</h2>
            <p class="subtitle">{ t("app.subtitle") }</p>
            <p class="lead">{ t("app.lead") }</p>
            <DifficultySelect on_select={handlers.start.clone()} />
            {
                if state.has_key() {
                    Html::default()
                } else {
                    html! { <p class="muted need-key">{ t("start.need_key") }</p> }
                }
            }
            <ApiKeyPanel
                masked_key={(*state.key_mask).clone()}
                rejected={*state.key_rejected}
                on_save={handlers.save_key.clone()}
                on_clear={handlers.clear_key.clone()}
            />
            <p class="footnote">{ t("start.footnote") }</p>
        </section>
    }
}
