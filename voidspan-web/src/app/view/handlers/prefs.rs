use crate::app::state::AppState;
use yew::prelude::*;

pub fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        current_language.set(crate::i18n::current_lang());
    })
}

pub fn build_toggle_debug(state: &AppState) -> Callback<()> {
    let show_debug = state.show_debug.clone();
    Callback::from(move |()| show_debug.set(!*show_debug))
}

pub fn build_open_image(state: &AppState) -> Callback<AttrValue> {
    let selected = state.selected_image.clone();
    Callback::from(move |url: AttrValue| selected.set(Some(url)))
}

pub fn build_close_image(state: &AppState) -> Callback<()> {
    let selected = state.selected_image.clone();
    Callback::from(move |()| selected.set(None))
}
