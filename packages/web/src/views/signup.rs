//! Registration page view.

use dioxus::prelude::*;
use store::validation::FieldErrors;
use store::{ActionResult, RoleType, SignupField, SignupForm, ValidationError};
use ui::{use_auth, use_session};

use crate::Route;

/// Register page component.
#[component]
pub fn Signup() -> Element {
    let auth = use_auth();
    let handle = use_session();
    let nav = use_navigator();
    let mut form = use_signal(SignupForm::default);
    let mut field_errors = use_signal(FieldErrors::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go home
    if !auth().loading && auth().is_authenticated() {
        nav.replace(Route::Home {});
    }

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let handle = handle.clone();
        spawn(async move {
            error.set(None);
            field_errors.set(FieldErrors::new());

            let validated = form.read().validate();
            let request = match validated {
                Ok(request) => request,
                Err(ValidationError::Fields(errors)) => {
                    field_errors.set(errors);
                    return;
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            loading.set(true);
            let result = handle.signup(&request).await;
            loading.set(false);
            match result {
                ActionResult::Success => {
                    nav.replace(Route::Home {});
                }
                ActionResult::Failure(message) => error.set(Some(message)),
            }
        });
    };

    let field_error = move |field: SignupField| field_errors.read().get(&field).copied();

    rsx! {
        div {
            class: "auth-page",

            h1 { "Create Account" }
            p { "Sign up for FamilyQ" }

            form {
                onsubmit: handle_signup,

                if let Some(err) = error() {
                    div { class: "error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Login ID",
                    value: form.read().login_id.clone(),
                    oninput: move |evt: FormEvent| form.write().login_id = evt.value(),
                }
                if let Some(msg) = field_error(SignupField::LoginId) {
                    span { class: "field-error", "{msg}" }
                }

                input {
                    r#type: "password",
                    placeholder: "Password (min 6 characters)",
                    value: form.read().password.clone(),
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }
                if let Some(msg) = field_error(SignupField::Password) {
                    span { class: "field-error", "{msg}" }
                }

                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: form.read().password_confirm.clone(),
                    oninput: move |evt: FormEvent| form.write().password_confirm = evt.value(),
                }
                if let Some(msg) = field_error(SignupField::PasswordConfirm) {
                    span { class: "field-error", "{msg}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Name",
                    value: form.read().name.clone(),
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }
                if let Some(msg) = field_error(SignupField::Name) {
                    span { class: "field-error", "{msg}" }
                }

                input {
                    r#type: "number",
                    placeholder: "Birth year",
                    value: form.read().birth_year.clone(),
                    oninput: move |evt: FormEvent| form.write().birth_year = evt.value(),
                }
                if let Some(msg) = field_error(SignupField::BirthYear) {
                    span { class: "field-error", "{msg}" }
                }

                select {
                    value: form.read().role_type.map(|r| r.as_str()).unwrap_or_default(),
                    onchange: move |evt: FormEvent| form.write().role_type = RoleType::parse(&evt.value()),
                    option { value: "", "Choose your role" }
                    for role in RoleType::ALL {
                        option { value: role.as_str(), "{role.label()}" }
                    }
                }
                if let Some(msg) = field_error(SignupField::RoleType) {
                    span { class: "field-error", "{msg}" }
                }

                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
