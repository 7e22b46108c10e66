//! Card rendering a single search result.

use leptos::prelude::*;

use crate::net::types::SearchResult;
use crate::util::format::{card_delay_ms, display_name, format_score};

/// One result card: image (or placeholder glyph), title, and similarity
/// score.
///
/// `index` is the server rank; it only feeds the staggered entrance
/// animation. Cards are rendered in response order, never resorted.
#[component]
pub fn ResultCard(index: usize, result: SearchResult) -> impl IntoView {
    let title = display_name(result.filename.as_deref(), result.name.as_deref());
    let score = format_score(result.score);
    let delay = format!("animation-delay: {}ms", card_delay_ms(index));

    let image = match result.image_data {
        Some(src) => {
            let alt = title.clone();
            view! { <img class="result-card__image" src=src alt=alt loading="lazy"/> }.into_any()
        }
        None => view! { <div class="result-card__placeholder">"◉"</div> }.into_any(),
    };

    view! {
        <div class="result-card" style=delay>
            <div class="result-card__image-wrapper">{image}</div>
            <div class="result-card__info">
                <div class="result-card__title">{title}</div>
                <div class="result-card__score">
                    <span class="result-card__score-label">"Similarity:"</span>
                    <span class="result-card__score-value">{score}</span>
                </div>
            </div>
        </div>
    }
}
