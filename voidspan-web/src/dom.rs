use web_sys::{Document, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&wasm_bindgen::JsValue::from(message));
    #[cfg(not(target_arch = "wasm32"))]
    log::error!("{message}");
}

/// Show a blocking browser alert.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    gloo::dialogs::alert(message);
    #[cfg(not(target_arch = "wasm32"))]
    log::warn!("alert: {message}");
}

/// Scroll the element with `id` into view, if it is mounted.
pub fn scroll_to(id: &str) {
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(id))
        {
            el.scroll_into_view();
        }
    }
}
