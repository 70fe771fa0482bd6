use dioxus::prelude::*;
use store::AdminQuestion;
use ui::{use_gateway, LoadingSpinner};

use api::admin::{CREATE_FAILED, DELETE_FAILED, LIST_FAILED};

/// Question pool management for admins.
#[component]
pub fn AdminQuestions() -> Element {
    let gateway = use_gateway();
    let mut questions = use_signal(Vec::<AdminQuestion>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut text = use_signal(String::new);
    let mut order_index = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let list_gateway = gateway.clone();
    let mut loader = use_resource(move || {
        let gateway = list_gateway.clone();
        async move {
            match api::admin::list(&gateway).await {
                Ok(loaded) => {
                    error.set(None);
                    questions.set(loaded);
                }
                Err(e) => error.set(Some(e.user_message(LIST_FAILED))),
            }
        }
    });

    let create_gateway = gateway.clone();
    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        if *submitting.peek() {
            return;
        }
        submitting.set(true);
        let gateway = create_gateway.clone();
        spawn(async move {
            error.set(None);
            let result = api::admin::create(&gateway, &text(), &order_index()).await;
            submitting.set(false);
            match result {
                Ok(_) => {
                    text.set(String::new());
                    order_index.set(String::new());
                    loader.restart();
                }
                Err(e) => error.set(Some(e.user_message(CREATE_FAILED))),
            }
        });
    };

    let handle_delete = move |question_id: i64| {
        let gateway = gateway.clone();
        spawn(async move {
            error.set(None);
            match api::admin::delete(&gateway, question_id).await {
                Ok(()) => loader.restart(),
                Err(e) => error.set(Some(e.user_message(DELETE_FAILED))),
            }
        });
    };

    if loader.read().is_none() {
        return rsx! { LoadingSpinner {} };
    }

    rsx! {
        h1 { "Question pool" }

        if let Some(err) = error() {
            div { class: "error", "{err}" }
        }

        form {
            class: "card",
            onsubmit: handle_create,
            textarea {
                placeholder: "Question text",
                disabled: submitting(),
                value: text(),
                oninput: move |evt: FormEvent| text.set(evt.value()),
            }
            input {
                r#type: "number",
                min: "1",
                placeholder: "Order (optional)",
                disabled: submitting(),
                value: order_index(),
                oninput: move |evt: FormEvent| order_index.set(evt.value()),
            }
            button {
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Adding..." } else { "Add question" }
            }
        }

        if questions.read().is_empty() {
            p { "No questions in the pool." }
        }

        ul {
            for question in questions() {
                li {
                    key: "{question.id}",
                    class: "card",
                    if let Some(order) = question.order_index {
                        span { class: "badge", "#{order}" }
                    }
                    p { "{question.text}" }
                    button {
                        onclick: {
                            let handle_delete = handle_delete.clone();
                            move |_| handle_delete(question.id)
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}
