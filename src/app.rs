//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::search::SearchPage;
use crate::state::search::SearchState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared search state context and mounts the single
/// search route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let search = RwSignal::new(SearchState::default());
    provide_context(search);

    view! {
        <Stylesheet id="leptos" href="/pkg/simsearch-client.css"/>
        <Title text="Visual Search"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SearchPage/>
            </Routes>
        </Router>
    }
}
