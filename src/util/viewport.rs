//! Window-level side effects: scrolling and full reloads.
//!
//! Requires a browser environment; non-`csr` builds no-op so navigation and
//! logout logic stay callable from native tests.

/// Smoothly scroll the viewport back to the top of the page.
pub fn scroll_to_top() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Reload the page, returning the app to its freshly loaded state.
pub fn reload() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().reload() {
                log::warn!("page reload failed: {err:?}");
            }
        }
    }
}
