//! Layout components that gate the route tree.
//!
//! `SessionWatch` wraps every route and handles 401 events from the gateway.
//! `RequireAuth` and `RequireAdmin` nest inside it; `AppLayout` adds the bottom
//! navigation for signed-in views.

use dioxus::prelude::*;
use store::{Guard, GuardDecision};
use ui::icons::{FaGear, FaHeart, FaListUl, FaScrewdriverWrench, FaUsers};
use ui::{clear_session_cookie, use_auth, use_auth_events, BottomNav, Icon, LoadingSpinner};

use crate::Route;

#[component]
pub fn SessionWatch() -> Element {
    let mut pending = use_auth_events();
    let mut session = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();

    use_effect(use_reactive((&route,), move |(route,)| {
        if pending.read().is_none() {
            return;
        }
        let Some(event) = pending.write().take() else {
            return;
        };
        let (change, redirect) = api::session::on_auth_event(&event, &route.to_string());
        session.write().apply(change);
        clear_session_cookie();
        if redirect {
            nav.replace(Route::Login {});
        }
    }));

    rsx! {
        Outlet::<Route> {}
    }
}

fn guarded(guard: Guard) -> Element {
    let session = use_auth();
    let nav = use_navigator();

    let decision = guard.decide(&session.read());
    match decision {
        GuardDecision::Loading => rsx! {
            LoadingSpinner {}
        },
        GuardDecision::Render => rsx! {
            Outlet::<Route> {}
        },
        GuardDecision::RedirectToLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        GuardDecision::RedirectHome => {
            nav.replace(Route::Home {});
            rsx! {}
        }
    }
}

#[component]
pub fn RequireAuth() -> Element {
    guarded(Guard::Authenticated)
}

#[component]
pub fn RequireAdmin() -> Element {
    guarded(Guard::Admin)
}

#[component]
pub fn AppLayout() -> Element {
    let session = use_auth();
    let is_admin = session.read().is_admin();

    rsx! {
        main {
            class: "page",
            Outlet::<Route> {}
        }
        BottomNav {
            Link {
                to: Route::Home {},
                active_class: "active",
                Icon { icon: FaHeart, width: 18, height: 18 }
                span { "Home" }
            }
            Link {
                to: Route::Questions {},
                active_class: "active",
                Icon { icon: FaListUl, width: 18, height: 18 }
                span { "Questions" }
            }
            Link {
                to: Route::FamilyView {},
                active_class: "active",
                Icon { icon: FaUsers, width: 18, height: 18 }
                span { "Family" }
            }
            Link {
                to: Route::Settings {},
                active_class: "active",
                Icon { icon: FaGear, width: 18, height: 18 }
                span { "Settings" }
            }
            if is_admin {
                Link {
                    to: Route::AdminQuestions {},
                    active_class: "active",
                    Icon { icon: FaScrewdriverWrench, width: 18, height: 18 }
                    span { "Admin" }
                }
            }
        }
    }
}
