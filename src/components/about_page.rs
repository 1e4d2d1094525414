use leptos::*;
use leptos_router::A;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>{ "About Page" }</h1>
            <p>{ "Rate the app and leave a comment on the reviews screen." }</p>
            <A href="/">{ "Back to reviews" }</A>
        </div>
    }
}
