//! One family question: the viewer's answer form, and every answer plus the
//! insight once the whole family has answered.

use dioxus::prelude::*;
use store::{AnswerStage, QuestionView};
use ui::{use_gateway, AnswerList, AnswerProgress, InsightPanel, LoadingSpinner};

use api::question::{LOAD_FAILED, SUBMIT_FAILED};

use crate::Route;

#[component]
pub fn QuestionDetail(id: i64) -> Element {
    let gateway = use_gateway();
    let mut view = use_signal(|| Option::<QuestionView>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let load_gateway = gateway.clone();
    let loader = use_resource(use_reactive((&id,), move |(id,)| {
        let gateway = load_gateway.clone();
        async move {
            match api::question::detail(&gateway, id).await {
                Ok(question) => {
                    error.set(None);
                    view.set(Some(QuestionView::new(question)));
                }
                Err(e) => error.set(Some(e.user_message(LOAD_FAILED))),
            }
        }
    }));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if *submitting.peek() {
            return;
        }
        submitting.set(true);
        let gateway = gateway.clone();
        spawn(async move {
            let draft = view.read().as_ref().map(|v| v.draft.clone()).unwrap_or_default();
            error.set(None);
            let result = api::question::submit(&gateway, id, &draft).await;
            submitting.set(false);
            match result {
                Ok(question) => {
                    if let Some(current) = view.write().as_mut() {
                        current.reload(question);
                    }
                }
                Err(e) => error.set(Some(e.user_message(SUBMIT_FAILED))),
            }
        });
    };

    if loader.read().is_none() {
        return rsx! { LoadingSpinner {} };
    }

    let Some(current) = view() else {
        let message = error().unwrap_or_else(|| LOAD_FAILED.to_string());
        return rsx! {
            div { class: "error", "{message}" }
            Link { to: Route::Questions {}, "Back to questions" }
        };
    };

    let question = current.question().clone();
    let stage = current.stage();
    let my_answer = current.my_answer().cloned();

    rsx! {
        Link { to: Route::Questions {}, "← Back to questions" }

        header {
            if let Some(day) = question.sequence_number {
                span { class: "badge", "Day {day}" }
            }
            if let Some(date) = question.assigned_date.as_deref() {
                span { " {date}" }
            }
            span {
                class: if question.completed { "badge badge--done" } else { "badge" },
                if question.completed { "Everyone answered" } else { "In progress" }
            }
        }

        h1 { "{question.question_text}" }

        if let Some((done, required)) = question.progress() {
            AnswerProgress {
                answered: done,
                required,
                percent: question.progress_percent().unwrap_or_default(),
            }
        }

        section {
            class: "card",
            h3 { "My answer" }

            if let Some(answer) = my_answer.filter(|_| stage != AnswerStage::Editing) {
                p { "{answer.content}" }
                if let Some(at) = answer.created_at.as_deref() {
                    small { "{at}" }
                }
                if current.can_edit() {
                    button {
                        r#type: "button",
                        onclick: move |_| {
                            error.set(None);
                            if let Some(current) = view.write().as_mut() {
                                current.start_edit();
                            }
                        },
                        "Edit answer"
                    }
                }
            }

            if current.shows_form() {
                form {
                    onsubmit: handle_submit,
                    textarea {
                        rows: "6",
                        placeholder: "Write your answer...",
                        disabled: submitting(),
                        value: current.draft.clone(),
                        oninput: move |evt: FormEvent| {
                            if let Some(current) = view.write().as_mut() {
                                current.draft = evt.value();
                            }
                        },
                    }
                    if let Some(err) = error() {
                        div { class: "error", "{err}" }
                    }
                    if stage == AnswerStage::Editing {
                        button {
                            r#type: "button",
                            disabled: submitting(),
                            onclick: move |_| {
                                error.set(None);
                                if let Some(current) = view.write().as_mut() {
                                    current.cancel_edit();
                                }
                            },
                            "Cancel"
                        }
                    }
                    button {
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() {
                            "Saving..."
                        } else if stage == AnswerStage::Editing {
                            "Update answer"
                        } else {
                            "Submit answer"
                        }
                    }
                }
            } else if stage == AnswerStage::Answered {
                p { "Waiting for the rest of the family to answer." }
            }
        }

        if stage == AnswerStage::Completed {
            if !current.visible_answers().is_empty() {
                section {
                    class: "card",
                    h3 { "Family answers" }
                    AnswerList { answers: current.visible_answers().to_vec() }
                }
            }
            if let Some(insight) = current.visible_insight().cloned() {
                InsightPanel { insight }
            }
        }
    }
}
