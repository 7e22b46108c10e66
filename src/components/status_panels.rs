//! Loading and error panels for the search page.

use leptos::prelude::*;

use crate::state::search::SearchState;

/// Spinner shown while a request is in flight.
#[component]
pub fn LoadingPanel() -> impl IntoView {
    view! {
        <div class="loading-panel">
            <div class="loading-panel__spinner"></div>
            <p class="loading-panel__text">"Searching..."</p>
        </div>
    }
}

/// Error panel showing the current error message from shared state.
#[component]
pub fn ErrorPanel() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();

    view! {
        <div class="error-panel">
            <p class="error-panel__message">{move || search.get().error}</p>
        </div>
    }
}
