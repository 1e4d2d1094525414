// Browser tests for the rating screen.
// Run with: wasm-pack test --headless --firefox --no-default-features --features wasm-test
#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::*;
use leptos_router::Router;
use ratingreview::components::review_page::{provide_review_store, ReviewPage};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

wasm_bindgen_test_configure!(run_in_browser);

fn new_container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&container).unwrap();
    container
}

// Mounts a fresh rating page inside its own container
fn mount_page() -> HtmlElement {
    let container = new_container();
    mount_to(container.clone(), || view! { <Router><ReviewPage /></Router> });
    container
}

// Leptos delegates input events, so they have to bubble
fn fire_input(target: &HtmlElement) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn type_into(container: &HtmlElement, selector: &str, value: &str) {
    let element = container.query_selector(selector).unwrap().expect(selector);
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.set_value(value);
    }
    fire_input(element.unchecked_ref());
}

fn click_button(container: &HtmlElement, label: &str) {
    let buttons = container.query_selector_all("button").unwrap();
    for i in 0..buttons.length() {
        let button: HtmlElement = buttons.item(i).unwrap().unchecked_into();
        if button.text_content().unwrap_or_default().trim() == label {
            button.click();
            return;
        }
    }
    panic!("no button labelled {label}");
}

fn click_star(container: &HtmlElement, stars: u32) {
    let buttons = container.query_selector_all("button.star").unwrap();
    let star: HtmlElement = buttons.item(stars - 1).unwrap().unchecked_into();
    star.click();
}

fn page_text(container: &HtmlElement) -> String {
    container.text_content().unwrap_or_default()
}

async fn settle() {
    sleep(Duration::from_millis(50)).await;
}

#[wasm_bindgen_test]
async fn test_valid_review_is_listed_and_form_resets() {
    let container = mount_page();

    click_star(&container, 4);
    type_into(&container, ".username-input", "ana");
    type_into(&container, "textarea", "Works well");
    settle().await;
    click_button(&container, "Submit Review");
    settle().await;

    let text = page_text(&container);
    assert!(text.contains("Review 1:"), "missing row in: {text}");
    assert!(text.contains("Comment: Works well"));
    assert!(text.contains("Average rating: 4.0"));
    assert!(text.contains("Total reviews: 1"));

    let textarea: HtmlTextAreaElement = container
        .query_selector("textarea")
        .unwrap()
        .unwrap()
        .unchecked_into();
    assert_eq!(textarea.value(), "");
}

#[wasm_bindgen_test]
async fn test_invalid_submission_shows_error() {
    let container = mount_page();

    type_into(&container, "textarea", "No rating given");
    type_into(&container, ".username-input", "bo");
    settle().await;
    click_button(&container, "Submit Review");
    settle().await;

    let text = page_text(&container);
    assert!(text.contains("Please pick a rating between 1 and 5"), "got: {text}");
    assert!(text.contains("No reviews yet"));
    assert!(text.contains("Total reviews: 0"));
}

#[wasm_bindgen_test]
async fn test_reviews_keep_submission_order() {
    let container = mount_page();

    for (stars, comment) in [(5, "a"), (4, "b"), (3, "c")] {
        type_into(&container, ".rating-input", &stars.to_string());
        type_into(&container, ".username-input", "user");
        type_into(&container, "textarea", comment);
        settle().await;
        click_button(&container, "Submit Review");
        settle().await;
    }

    let rows = container.query_selector_all("li.review").unwrap();
    assert_eq!(rows.length(), 3);
    let first = rows.item(0).unwrap().text_content().unwrap_or_default();
    let last = rows.item(2).unwrap().text_content().unwrap_or_default();
    assert!(first.contains("Review 1:") && first.contains("Comment: a"));
    assert!(last.contains("Review 3:") && last.contains("Comment: c"));
    assert!(page_text(&container).contains("Average rating: 4.0"));
}

#[wasm_bindgen_test]
async fn test_clear_resets_pending_fields() {
    let container = mount_page();

    type_into(&container, ".rating-input", "abc");
    type_into(&container, "textarea", "draft text");
    settle().await;
    let rating: HtmlInputElement = container
        .query_selector(".rating-input")
        .unwrap()
        .unwrap()
        .unchecked_into();
    assert_eq!(rating.value(), "abc");
    click_button(&container, "Clear");
    settle().await;

    let textarea: HtmlTextAreaElement = container
        .query_selector("textarea")
        .unwrap()
        .unwrap()
        .unchecked_into();
    assert_eq!(textarea.value(), "");
    assert_eq!(rating.value(), "");
    assert!(page_text(&container).contains("No reviews yet"));
}

#[wasm_bindgen_test]
async fn test_non_numeric_rating_is_kept_and_rejected() {
    let container = mount_page();

    type_into(&container, ".rating-input", "abc");
    type_into(&container, ".username-input", "cy");
    type_into(&container, "textarea", "Typed letters");
    settle().await;
    click_button(&container, "Submit Review");
    settle().await;

    let text = page_text(&container);
    assert!(text.contains("Rating \"abc\" is not a number"), "got: {text}");
    assert!(text.contains("No reviews yet"));
    let rating: HtmlInputElement = container
        .query_selector(".rating-input")
        .unwrap()
        .unwrap()
        .unchecked_into();
    assert_eq!(rating.value(), "abc");
}

#[wasm_bindgen_test]
async fn test_reviews_survive_leaving_the_page() {
    let container = new_container();
    let visible = create_rw_signal(true);
    mount_to(container.clone(), move || {
        provide_review_store();
        view! {
            <Router>
                <Show when=move || visible.get()>
                    <ReviewPage />
                </Show>
            </Router>
        }
    });

    click_star(&container, 5);
    type_into(&container, ".username-input", "dee");
    type_into(&container, "textarea", "Still here");
    settle().await;
    click_button(&container, "Submit Review");
    settle().await;

    visible.set(false);
    settle().await;
    assert!(!page_text(&container).contains("Review 1:"));

    visible.set(true);
    settle().await;
    let text = page_text(&container);
    assert!(text.contains("Review 1:"), "reviews lost after remount: {text}");
    assert!(text.contains("Comment: Still here"));
    assert!(text.contains("Total reviews: 1"));
}
