use chrono::Utc;
use leptos::*;
use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos_router::use_navigate;

use crate::components::star_rating::StarRating;
use crate::error::InvalidSubmission;
use crate::state::{ReviewAction, ReviewDraft};

/// Collects rating, username and comment, and reports why the last
/// submission was rejected.
#[component]
pub fn ReviewForm(
    #[prop(into)] draft: Signal<ReviewDraft>,
    #[prop(into)] error: Signal<Option<InvalidSubmission>>,
    on_action: Callback<ReviewAction>,
) -> impl IntoView {
    let navigate = use_navigate();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        log!("[FORM] Submit pressed");
        on_action.call(ReviewAction::Submit { at: Utc::now() });
    };

    let selected = Signal::derive(move || draft.with(|d| d.rating.selected_stars()));
    let on_select = Callback::new(move |stars: u8| on_action.call(ReviewAction::SelectRating(stars)));

    view! {
        <form class="review-form" on:submit=handle_submit>
            <h1>{ "Rate Our App" }</h1>
            <StarRating selected=selected on_select=on_select />
            <label>
                { "Rating (1-5)" }
                <input
                    type="text"
                    inputmode="numeric"
                    class="rating-input"
                    prop:value=move || draft.with(|d| d.rating.to_string())
                    on:input=move |e| on_action.call(ReviewAction::SetRatingText(event_target_value(&e)))
                />
            </label>
            <input
                type="text"
                class="username-input"
                placeholder="Username"
                prop:value=move || draft.with(|d| d.username.clone())
                on:input=move |e| on_action.call(ReviewAction::SetUsername(event_target_value(&e)))
            />
            <p>{ "Leave a comment:" }</p>
            <textarea
                placeholder="Enter your comment"
                prop:value=move || draft.with(|d| d.comment.clone())
                on:input=move |e| on_action.call(ReviewAction::SetComment(event_target_value(&e)))
            />
            {move || error.get().map(|err| view! { <p class="review-error">{ err.to_string() }</p> })}
            <div class="review-actions">
                <button type="submit">{ "Submit Review" }</button>
                <button type="button" on:click=move |_| on_action.call(ReviewAction::Clear)>{ "Clear" }</button>
                <button type="button" on:click=move |_| navigate("/about", Default::default())>{ "About" }</button>
            </div>
        </form>
    }
}
