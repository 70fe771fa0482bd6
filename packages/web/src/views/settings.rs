use dioxus::prelude::*;
use store::{ActionResult, Family};
use ui::{use_auth, use_gateway, use_session, LoadingSpinner};

use api::family::LOAD_FAILED;
use api::{Backend, Started};

use super::family::{FamilySetup, StartQuestions};
use crate::Route;

/// Profile, family setup, starting questions and logout.
#[component]
pub fn Settings() -> Element {
    let auth = use_auth();
    let gateway = use_gateway();
    let handle = use_session();
    let nav = use_navigator();
    let mut family = use_signal(|| Option::<Family>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<&'static str>::None);
    let mut logging_out = use_signal(|| false);

    let loader = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            let has_family = auth.read().user.as_ref().is_some_and(|u| u.has_family());
            if !has_family {
                family.set(None);
                return;
            }
            match gateway.my_family().await {
                Ok(loaded) => {
                    error.set(None);
                    family.set(Some(loaded));
                }
                Err(e) => error.set(Some(e.user_message(LOAD_FAILED))),
            }
        }
    });

    let handle_logout = move |_| {
        if *logging_out.peek() {
            return;
        }
        logging_out.set(true);
        let handle = handle.clone();
        spawn(async move {
            error.set(None);
            let result = handle.logout().await;
            logging_out.set(false);
            match result {
                ActionResult::Success => {
                    nav.replace(Route::Login {});
                }
                ActionResult::Failure(message) => error.set(Some(message)),
            }
        });
    };

    if loader.read().is_none() {
        return rsx! { LoadingSpinner {} };
    }

    let name = auth.read().user.as_ref().map(|u| u.name.clone()).unwrap_or_default();

    rsx! {
        h1 { "Family and account" }

        if let Some(err) = error() {
            div { class: "error", "{err}" }
        }
        if let Some(msg) = notice() {
            div { class: "notice", "{msg}" }
        }

        section {
            class: "card",
            h3 { "Profile" }
            p { "{name}" }
        }

        {match family() {
            None => rsx! {
                FamilySetup {
                    on_changed: move |loaded| {
                        notice.set(Some("You're in a family now!"));
                        family.set(loaded);
                    },
                }
            },
            Some(current) => rsx! {
                section {
                    class: "card",
                    h3 { "Family" }
                    p {
                        "Invite code: "
                        strong { "{current.family_code}" }
                    }
                    p { "{current.member_count()} members" }
                    StartQuestions {
                        family: current.clone(),
                        on_started: move |started: Started| {
                            notice.set(Some("Questions started! Check today's question on the home screen."));
                            family.set(Some(started.family));
                        },
                    }
                }
            },
        }}

        section {
            class: "card",
            button {
                disabled: logging_out(),
                onclick: handle_logout,
                if logging_out() { "Logging out..." } else { "Log out" }
            }
        }
    }
}
