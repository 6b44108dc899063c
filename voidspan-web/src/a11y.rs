// Accessibility helpers

/// Id of the polite live region announcing purchases and run changes.
pub const STATUS_REGION_ID: &str = "void-status";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the page load.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #a78bfa;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers
///
/// Updates the text content of the status region if it is mounted. No-op off
/// the browser.
pub fn set_status(msg: &str) {
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(node) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
        {
            node.set_text_content(Some(msg));
        }
    }
}
