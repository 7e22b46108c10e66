//! Search page composing the form and the loading/error/results panels.

use leptos::prelude::*;

use crate::components::results_panel::ResultsPanel;
use crate::components::search_form::SearchForm;
use crate::components::status_panels::{ErrorPanel, LoadingPanel};
use crate::state::search::{SearchPhase, SearchState};

/// The search page.
///
/// At most one of the loading, error, and results panels is visible at
/// a time; the phase enum makes the exclusivity structural.
#[component]
pub fn SearchPage() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let phase = move || search.get().phase;

    view! {
        <div class="search-page">
            <header class="search-page__header">
                <h1>"Visual Search"</h1>
                <p class="search-page__tagline">"Find images by describing them"</p>
            </header>

            <SearchForm/>

            <Show when=move || phase() == SearchPhase::Loading>
                <LoadingPanel/>
            </Show>
            <Show when=move || phase() == SearchPhase::Error>
                <ErrorPanel/>
            </Show>
            <Show when=move || phase() == SearchPhase::Results>
                <ResultsPanel/>
            </Show>
        </div>
    }
}
