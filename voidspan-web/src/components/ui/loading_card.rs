use crate::i18n;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Fixed text; when absent the judging banners rotate.
    #[prop_or_default]
    pub message: Option<AttrValue>,
}

/// Localised banner for rotation step `tick`.
#[must_use]
pub fn banner_for(tick: usize) -> String {
    let idx = tick % voidspan_game::LOADING_MESSAGES.len();
    i18n::t(&format!("loading.{idx}"))
}

#[function_component(LoadingCard)]
pub fn loading_card(p: &Props) -> Html {
    // None until the first rotation, matching the static "judging" banner.
    let tick = use_state(|| None::<usize>);
    // Timers exist only in the browser; elsewhere the static banner stays up.
    #[cfg(target_arch = "wasm32")]
    {
        let tick = tick.clone();
        let rotating = p.message.is_none();
        use_effect_with(rotating, move |rotating| {
            let interval = rotating.then(|| start_rotation(tick));
            move || drop(interval)
        });
    }

    let text = p.message.as_ref().map_or_else(
        || (*tick).map_or_else(|| i18n::t("void.judging"), banner_for),
        ToString::to_string,
    );
    html! {
        <div class="panel loading-card" role="status" aria-live="polite">
            <div class="spinner" aria-hidden="true"></div>
            <div class="loading-text pixel-font">{ text }</div>
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn start_rotation(tick: UseStateHandle<Option<usize>>) -> gloo::timers::callback::Interval {
    use crate::game::constants::LOADING_ROTATE_MS;
    let mut step = 0_usize;
    gloo::timers::callback::Interval::new(LOADING_ROTATE_MS, move || {
        tick.set(Some(step));
        step = step.wrapping_add(1);
    })
}
