use leptos::*;

use crate::models::rating::MAX_STARS;
use crate::stars::{render_stars, stars_to_string, StarGlyph, StarPadding};

/// Five clickable stars, filled up to the current selection.
#[component]
pub fn StarRating(#[prop(into)] selected: Signal<u8>, on_select: Callback<u8>) -> impl IntoView {
    view! {
        <div class="star-rating">
            {(1..=MAX_STARS).map(|stars| view! {
                <button
                    type="button"
                    class="star"
                    title={format!("{stars} star(s)")}
                    on:click=move |_| on_select.call(stars)
                >
                    {move || {
                        let glyph = if stars <= selected.get() { StarGlyph::Filled } else { StarGlyph::Empty };
                        glyph.to_string()
                    }}
                </button>
            }).collect::<Vec<_>>()}
        </div>
    }
}

/// Read-only row of star glyphs for a rating or an average.
#[component]
pub fn StarRow(#[prop(into)] value: MaybeSignal<f64>, padding: StarPadding) -> impl IntoView {
    view! {
        <span class="stars">
            {move || stars_to_string(&render_stars(value.get(), padding))}
        </span>
    }
}
