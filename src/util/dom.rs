//! Focus and scroll helpers.
//!
//! Requires a browser environment; on the server these are no-ops.

/// `id` of the query input, used for the on-mount autofocus.
pub const SEARCH_INPUT_ID: &str = "search-input";

/// `id` of the results section, used for the post-render scroll.
pub const RESULTS_SECTION_ID: &str = "results-section";

/// Move keyboard focus to the search input.
pub fn focus_search_input() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.get_element_by_id(SEARCH_INPUT_ID) {
                if let Ok(input) = el.dyn_into::<web_sys::HtmlElement>() {
                    let _ = input.focus();
                }
            }
        }
    }
}

/// Smooth-scroll the results section into view.
pub fn scroll_results_into_view() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.get_element_by_id(RESULTS_SECTION_ID) {
                let opts = web_sys::ScrollIntoViewOptions::new();
                opts.set_behavior(web_sys::ScrollBehavior::Smooth);
                opts.set_block(web_sys::ScrollLogicalPosition::Nearest);
                el.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        }
    }
}
