//! Search form with query input, submit button, and example chips.
//!
//! Pressing enter, clicking the button, and activating a chip all
//! funnel into the same submission flow, guarded by the shared
//! in-flight flag.

use leptos::prelude::*;

use crate::state::search::SearchState;
use crate::util::dom;

/// Preset queries offered as one-click chips under the input.
const EXAMPLE_QUERIES: [&str; 4] = [
    "red sports car",
    "sunset over the ocean",
    "a dog playing in snow",
    "city skyline at night",
];

/// The query form and example-chip row.
#[component]
pub fn SearchForm() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let input = RwSignal::new(String::new());

    // Autofocus once the page is interactive.
    Effect::new(move || dom::focus_search_input());

    let submit = move || {
        let raw = input.get_untracked();
        if let Some(query) = search.try_update(|s| s.try_begin(&raw)).flatten() {
            run_search(search, query);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    view! {
        <form class="search-form" on:submit=on_submit>
            <input
                id=dom::SEARCH_INPUT_ID
                class="search-form__input"
                type="text"
                placeholder="Describe the image you're looking for..."
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit">
                "Search"
            </button>
        </form>
        <div class="search-form__examples">
            <span class="search-form__examples-label">"Try:"</span>
            {EXAMPLE_QUERIES
                .into_iter()
                .map(|preset| {
                    view! {
                        <button
                            class="example-chip"
                            type="button"
                            on:click=move |_| {
                                input.set(preset.to_owned());
                                submit();
                            }
                        >
                            {preset}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Drive one search round-trip and apply the outcome to shared state.
///
/// Both arms clear the in-flight flag and leave Loading behind; the
/// cleanup is straight-line code after the single await, so it runs on
/// every exit path.
fn run_search(search: RwSignal<SearchState>, query: String) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_search(&query).await {
                Ok(response) => {
                    search.update(|s| s.apply_response(response));
                    if search.get_untracked().phase == crate::state::search::SearchPhase::Results {
                        // Let the section paint before scrolling to it.
                        gloo_timers::future::sleep(std::time::Duration::from_millis(100)).await;
                        dom::scroll_results_into_view();
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("search failed: {e}");
                    search.update(|s| s.apply_error(e.to_string()));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (search, query);
    }
}
