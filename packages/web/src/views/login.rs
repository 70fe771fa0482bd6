//! Login page view with login ID / password form.

use dioxus::prelude::*;
use store::validation::validate_login;
use store::ActionResult;
use ui::{use_auth, use_session};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let handle = use_session();
    let nav = use_navigator();
    let mut login_id = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go home
    if !auth().loading && auth().is_authenticated() {
        nav.replace(Route::Home {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let handle = handle.clone();
        spawn(async move {
            error.set(None);

            let request = match validate_login(&login_id(), &password()) {
                Ok(request) => request,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            loading.set(true);
            let result = handle.login(&request).await;
            loading.set(false);
            match result {
                ActionResult::Success => {
                    nav.replace(Route::Home {});
                }
                ActionResult::Failure(message) => error.set(Some(message)),
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "FamilyQ" }
            p { "One question a day, answered together." }

            form {
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Login ID",
                    autocomplete: "username",
                    value: login_id(),
                    oninput: move |evt: FormEvent| login_id.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    autocomplete: "current-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                "No account yet? "
                Link { to: Route::Signup {}, "Sign up" }
            }
        }
    }
}
