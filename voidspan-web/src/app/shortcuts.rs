//! Document-level keyboard shortcuts.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Shift+D shows or hides the debug monitor.
    ToggleDebug,
    /// Escape closes the image lightbox.
    CloseLightbox,
}

/// Map a `KeyboardEvent.key` plus its shift state to a shortcut.
#[must_use]
pub fn shortcut_for(key: &str, shift: bool) -> Option<Shortcut> {
    match key {
        "D" if shift => Some(Shortcut::ToggleDebug),
        "Escape" => Some(Shortcut::CloseLightbox),
        _ => None,
    }
}

#[cfg(target_arch = "wasm32")]
#[yew::hook]
pub fn use_shortcuts(state: &crate::app::state::AppState) {
    use gloo::events::EventListener;
    use wasm_bindgen::JsCast;
    use yew::prelude::*;

    let show_debug = state.show_debug.clone();
    let selected_image = state.selected_image.clone();
    let debug_open = *state.show_debug;
    // Re-registered when the flag flips so the toggle reads the current value.
    use_effect_with(debug_open, move |debug_open| {
        let debug_open = *debug_open;
        let listener = EventListener::new(&crate::dom::document(), "keydown", move |event| {
            let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            match shortcut_for(&event.key(), event.shift_key()) {
                Some(Shortcut::ToggleDebug) => show_debug.set(!debug_open),
                Some(Shortcut::CloseLightbox) => selected_image.set(None),
                None => {}
            }
        });
        move || drop(listener)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_d_toggles_debug() {
        assert_eq!(shortcut_for("D", true), Some(Shortcut::ToggleDebug));
        assert_eq!(shortcut_for("D", false), None);
        assert_eq!(shortcut_for("d", false), None);
    }

    #[test]
    fn escape_closes_lightbox() {
        assert_eq!(shortcut_for("Escape", false), Some(Shortcut::CloseLightbox));
        assert_eq!(shortcut_for("Enter", false), None);
    }
}
