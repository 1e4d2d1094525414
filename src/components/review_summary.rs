use leptos::*;

use crate::components::star_rating::StarRow;
use crate::models::rating::MAX_STARS;
use crate::models::review::ReviewCollection;
use crate::stars::StarPadding;

/// Average rating, total count and how the ratings are spread.
#[component]
pub fn ReviewSummary(#[prop(into)] reviews: Signal<ReviewCollection>) -> impl IntoView {
    let average = create_memo(move |_| reviews.with(ReviewCollection::average_rating));

    view! {
        <section class="review-summary">
            <h2>
                { "Average rating: " }
                {move || reviews.with(ReviewCollection::formatted_average)}
                " "
                <StarRow value=Signal::derive(move || average.get()) padding=StarPadding::None />
            </h2>
            <p>{move || format!("Total reviews: {}", reviews.with(ReviewCollection::len))}</p>
            <ul class="rating-distribution">
                {move || {
                    let counts = reviews.with(ReviewCollection::rating_distribution);
                    (1..=MAX_STARS).rev().map(|stars| view! {
                        <li>{ format!("{stars}★: {}", counts[usize::from(stars) - 1]) }</li>
                    }).collect::<Vec<_>>()
                }}
            </ul>
        </section>
    }
}
