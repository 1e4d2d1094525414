use leptos::*;
use crate::components::star_rating::StarRow;
use crate::models::review::ReviewCollection;
use crate::stars::StarPadding;

/// One row per review, in submission order.
#[component]
pub fn ReviewsList(#[prop(into)] reviews: Signal<ReviewCollection>) -> impl IntoView {
    view! {
        <div class="reviews-list">
            <h3>{ "Reviews" }</h3>
            {move || reviews.with(|reviews| {
                if reviews.is_empty() {
                    return view! { <p>{ "No reviews yet" }</p> }.into_view();
                }
                view! {
                    <ul>
                        {reviews.iter().enumerate().map(|(index, review)| {
                            let stars = f64::from(review.rating().value());
                            view! {
                                <li class="review" key={index.to_string()}>
                                    <h4>{ format!("Review {}:", index + 1) }</h4>
                                    <p class="review-user">{ review.username().to_string() }</p>
                                    <StarRow value=stars padding=StarPadding::Pad />
                                    <p>{ format!("Rating: {}", review.rating()) }</p>
                                    <p>{ format!("Comment: {}", review.comment()) }</p>
                                    <small>{ review.date().format("%Y-%m-%d %H:%M UTC").to_string() }</small>
                                </li>
                            }
                        }).collect::<Vec<_>>()}
                    </ul>
                }.into_view()
            })}
        </div>
    }
}
