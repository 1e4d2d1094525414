/// The rating screen. The draft and submitted reviews live in a store
/// provided by `App`, so they survive navigating to other routes.
use leptos::*;
use leptos::logging::warn;

use crate::components::{review_form::ReviewForm, review_summary::ReviewSummary, reviews_list::ReviewsList};
use crate::error::InvalidSubmission;
use crate::state::{ReviewAction, ReviewPageState};

/// Shared handle to the rating screen's state.
#[derive(Clone, Copy)]
pub struct ReviewStore(pub RwSignal<ReviewPageState>);

/// Creates the store and registers it for every component below the caller.
pub fn provide_review_store() -> ReviewStore {
    let store = ReviewStore(create_rw_signal(ReviewPageState::default()));
    provide_context(store);
    store
}

fn use_review_store() -> ReviewStore {
    use_context::<ReviewStore>().unwrap_or_else(|| {
        warn!("[REVIEW] No review store in context, reviews will not outlive this page");
        provide_review_store()
    })
}

#[component]
pub fn ReviewPage() -> impl IntoView {
    let ReviewStore(state) = use_review_store();
    let (error, set_error) = create_signal(None::<InvalidSubmission>);

    let dispatch = Callback::new(move |action: ReviewAction| {
        let mut outcome = Ok(());
        state.update(|current| outcome = current.apply(action));
        set_error.set(outcome.err());
    });

    let draft = Signal::derive(move || state.with(|s| s.draft.clone()));
    let reviews = create_memo(move |_| state.with(|s| s.reviews.clone()));

    view! {
        <div class="review-page">
            <ReviewForm draft=draft error=error on_action=dispatch />
            <ReviewSummary reviews=reviews />
            <ReviewsList reviews=reviews />
        </div>
    }
}
