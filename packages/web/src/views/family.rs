//! Family page plus the family setup and start controls shared with home and
//! settings.

use dioxus::prelude::*;
use store::{Family, StartControl};
use ui::{use_auth, use_gateway, use_session, LoadingSpinner};

use api::family::{CREATE_FAILED, JOIN_FAILED, LOAD_FAILED, START_FAILED};
use api::{Backend, Started};

/// Create a family or join one with a code. `on_changed` receives the
/// reloaded family after the session has been refreshed.
#[component]
pub fn FamilySetup(on_changed: EventHandler<Option<Family>>) -> Element {
    let gateway = use_gateway();
    let handle = use_session();
    let mut code = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let create_gateway = gateway.clone();
    let create_handle = handle.clone();
    let handle_create = move |_| {
        if *busy.peek() {
            return;
        }
        busy.set(true);
        let gateway = create_gateway.clone();
        let handle = create_handle.clone();
        spawn(async move {
            error.set(None);
            let result = api::family::create(&gateway).await;
            busy.set(false);
            match result {
                Ok(membership) => {
                    handle.apply(membership.change);
                    on_changed.call(membership.family);
                }
                Err(e) => error.set(Some(e.user_message(CREATE_FAILED))),
            }
        });
    };

    let handle_join = move |evt: FormEvent| {
        evt.prevent_default();
        if *busy.peek() {
            return;
        }
        busy.set(true);
        let gateway = gateway.clone();
        let handle = handle.clone();
        spawn(async move {
            error.set(None);
            let result = api::family::join(&gateway, &code()).await;
            busy.set(false);
            match result {
                Ok(membership) => {
                    code.set(String::new());
                    handle.apply(membership.change);
                    on_changed.call(membership.family);
                }
                Err(e) => error.set(Some(e.user_message(JOIN_FAILED))),
            }
        });
    };

    rsx! {
        section {
            class: "card",
            h3 { "Start a family" }
            p { "Create a new family or join one with an invite code." }

            if let Some(err) = error() {
                div { class: "error", "{err}" }
            }

            button {
                disabled: busy(),
                onclick: handle_create,
                if busy() { "Working..." } else { "Create a family" }
            }

            p { "or" }

            form {
                onsubmit: handle_join,
                input {
                    r#type: "text",
                    placeholder: "Invite code",
                    disabled: busy(),
                    value: code(),
                    oninput: move |evt: FormEvent| code.set(evt.value().to_uppercase()),
                }
                button {
                    r#type: "submit",
                    disabled: busy() || code().trim().is_empty(),
                    "Join"
                }
            }
        }
    }
}

/// The "start questions" control. Hidden once questions have started.
#[component]
pub fn StartQuestions(family: Family, on_started: EventHandler<Started>) -> Element {
    let gateway = use_gateway();
    let mut in_flight = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let control = StartControl::for_family(&family, in_flight());
    if control == StartControl::Hidden {
        return rsx! {};
    }

    let handle_start = move |_| {
        // Claimed synchronously so a second click before the task runs is refused
        let Ok(control) = StartControl::begin(&family, &mut in_flight.write()) else {
            return;
        };
        let gateway = gateway.clone();
        spawn(async move {
            error.set(None);
            let result = api::family::start_questions(&gateway, control).await;
            in_flight.set(false);
            match result {
                Ok(started) => on_started.call(started),
                Err(e) => error.set(Some(e.user_message(START_FAILED))),
            }
        });
    };

    rsx! {
        div {
            class: "start-questions",
            if let Some(err) = error() {
                div { class: "error", "{err}" }
            }
            button {
                disabled: !control.is_enabled(),
                onclick: handle_start,
                if control == StartControl::Pending { "Starting..." } else { "Start daily questions" }
            }
            if control == StartControl::Disabled {
                p { "At least two members are needed to start." }
            }
        }
    }
}

#[component]
pub fn FamilyView() -> Element {
    let auth = use_auth();
    let gateway = use_gateway();
    let mut family = use_signal(|| Option::<Family>::None);
    let mut error = use_signal(|| Option::<String>::None);

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

    if loader.read().is_none() {
        return rsx! { LoadingSpinner {} };
    }

    let me = auth.read().user.as_ref().map(|u| u.id);

    rsx! {
        h1 { "Our family" }

        if let Some(err) = error() {
            div { class: "error", "{err}" }
        }

        {match family() {
            None => rsx! {
                FamilySetup { on_changed: move |loaded| family.set(loaded) }
            },
            Some(current) => rsx! {
                section {
                    class: "card",
                    p {
                        "Invite code: "
                        strong { "{current.family_code}" }
                    }
                    p { "{current.member_count()} members" }
                    ul {
                        for member in current.members.iter().cloned() {
                            li {
                                key: "{member.user_id}",
                                "{member.name}"
                                if let Some(role) = member.role_type {
                                    " · {role.label()}"
                                }
                                if Some(member.user_id) == me {
                                    " (me)"
                                }
                            }
                        }
                    }
                }
                StartQuestions {
                    family: current.clone(),
                    on_started: move |started: Started| family.set(Some(started.family)),
                }
            },
        }}
    }
}
