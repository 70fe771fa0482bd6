use dioxus::prelude::*;

/// Reload the whole app. Used as the last resort after a rendering failure.
pub fn reload_page() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                tracing::error!("Reload failed: {:?}", e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::warn!("Reload requested outside the browser");
}

/// Shown by the top-level error boundary.
#[component]
pub fn ReloadFallback(message: String) -> Element {
    rsx! {
        div {
            class: "fallback",
            h2 { "Something went wrong" }
            p { "{message}" }
            button {
                onclick: move |_| reload_page(),
                "Reload"
            }
        }
    }
}
