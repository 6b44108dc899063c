use crate::game::GameState;
use crate::i18n;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub state: GameState,
    pub on_close: Callback<()>,
}

/// Raw counters, unformatted, for checking the turn rules by eye.
#[function_component(DebugPanel)]
pub fn debug_panel(p: &Props) -> Html {
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let s = &p.state;
    html! {
        <aside class="debug-panel" aria-labelledby="debug-title" data-testid="debug-panel">
            <div class="debug-head">
                <span id="debug-title">{ i18n::t("debug.title") }</span>
                <button class="debug-close" onclick={close} aria-label={i18n::t("ui.close")}>{ "X" }</button>
            </div>
            <dl class="debug-grid">
                <dt>{ i18n::t("debug.status") }</dt><dd class="debug-status">{ s.status.as_str() }</dd>
                <dt>{ i18n::t("debug.time") }</dt><dd>{ s.remaining_time.to_string() }</dd>
                <dt>{ i18n::t("debug.money") }</dt><dd>{ s.remaining_money.to_string() }</dd>
                <dt>{ i18n::t("debug.sanity") }</dt><dd>{ format!("{}%", s.sanity) }</dd>
                <dt>{ i18n::t("debug.turns") }</dt><dd>{ s.turn().to_string() }</dd>
            </dl>
        </aside>
    }
}
