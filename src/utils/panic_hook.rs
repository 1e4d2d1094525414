use std::panic;
use leptos::logging::{error, log};

/// Installs the browser console hook and adds hints for reactive-owner panics,
/// which show up when a callback fires after its page has unmounted.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Call the original hook first
        original_hook(panic_info);

        let message = panic_message(panic_info.payload());
        if message.contains("OwnerDisposed") {
            error!("[PANIC] A reactive owner was used after disposal.");
            error!("[PANIC] A review page callback most likely ran after navigating away.");
        }
        if let Some(location) = panic_info.location() {
            log!("[PANIC] at {}:{}", location.file(), location.line());
        }
    }));
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

/// Call once before mounting the app.
pub fn init() {
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up successfully");
}
