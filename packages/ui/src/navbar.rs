use dioxus::prelude::*;

use crate::COMPONENTS_CSS;

/// Fixed bottom navigation for the signed-in views. Callers pass the links so
/// this crate stays independent of the route table.
#[component]
pub fn BottomNav(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: COMPONENTS_CSS }
        nav {
            class: "bottom-nav",
            {children}
        }
    }
}
