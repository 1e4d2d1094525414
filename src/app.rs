/// Main application entry point.
/// Routes between the rating screen and the static about screen and owns the review store.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::components::{about_page::AboutPage, review_page::{provide_review_store, ReviewPage}};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    // Reviews are kept here so they outlive route changes.
    provide_review_store();

    view! {
        <Stylesheet id="leptos" href="/pkg/ratingreview.css" />
        <Title text="Rate Our App" />
        <Router>
            <main>
                <Routes>
                    // Rating screen, the initial route.
                    <Route path="" view=ReviewPage />
                    <Route path="/about" view=AboutPage />
                </Routes>
            </main>
        </Router>
    }
}
