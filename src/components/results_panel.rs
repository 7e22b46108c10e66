//! Results section: count label plus the card grid.

use leptos::prelude::*;

use crate::components::result_card::ResultCard;
use crate::state::search::SearchState;
use crate::util::dom;
use crate::util::format::results_count_label;

/// Grid of result cards with a pluralized count heading.
#[component]
pub fn ResultsPanel() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();

    view! {
        <section class="results" id=dom::RESULTS_SECTION_ID>
            <div class="results__count">{move || results_count_label(search.get().count)}</div>
            <div class="results__grid">
                {move || {
                    search
                        .get()
                        .results
                        .into_iter()
                        .enumerate()
                        .map(|(index, result)| {
                            view! { <ResultCard index=index result=result/> }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
