use crate::app::state::AppState;
use yew::prelude::*;

pub fn build_save_key(state: &AppState) -> Callback<String> {
    let app = state.clone();
    Callback::from(move |input: String| {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return;
        }
        store_key(trimmed);
        app.key_mask.set(Some(crate::game::mask_api_key(trimmed)));
        app.key_rejected.set(false);
        app.show_key_panel.set(false);
    })
}

pub fn build_clear_key(state: &AppState) -> Callback<()> {
    let app = state.clone();
    Callback::from(move |()| {
        forget_key();
        app.key_mask.set(None);
        app.key_rejected.set(false);
        app.show_key_panel.set(true);
    })
}

pub fn build_toggle_key_panel(state: &AppState) -> Callback<()> {
    let show = state.show_key_panel.clone();
    Callback::from(move |()| show.set(!*show))
}

/// The provider refused the key, or none was stored: ask for another, but keep the stored one.
pub fn mark_key_rejected(app: &AppState) {
    app.key_rejected.set(true);
    app.show_key_panel.set(true);
    crate::a11y::set_status(&crate::i18n::t(key_problem(app.key_mask.is_some())));
}

/// Message key for a refused call; a missing key is not a rejected one.
#[must_use]
pub const fn key_problem(has_stored_key: bool) -> &'static str {
    if has_stored_key { "key.rejected" } else { "key.missing" }
}

#[cfg(target_arch = "wasm32")]
fn store_key(key: &str) {
    use crate::game::{KeyStore, WebKeyStore};
    if let Err(err) = WebKeyStore.save(key) {
        log::error!("could not save API key: {err}");
        crate::dom::console_error(&err.to_string());
    }
}

#[cfg(target_arch = "wasm32")]
fn forget_key() {
    use crate::game::{KeyStore, WebKeyStore};
    if let Err(err) = WebKeyStore.clear() {
        log::error!("could not clear API key: {err}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
const fn store_key(_key: &str) {}

#[cfg(not(target_arch = "wasm32"))]
const fn forget_key() {}
