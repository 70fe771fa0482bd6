use dioxus::prelude::*;

/// Neutral loading indicator, shown while the session or a view's data loads.
#[component]
pub fn LoadingSpinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "spinner",
            role: "status",
            div { class: "spinner__dot" }
            span { "{label}" }
        }
    }
}
