use dioxus::prelude::*;
use store::Answer;

/// Every member's answer to a completed question.
#[component]
pub fn AnswerList(answers: Vec<Answer>) -> Element {
    rsx! {
        ul {
            class: "answer-list",
            for answer in answers {
                li {
                    key: "{answer.answer_id}",
                    class: "answer-list__item",
                    div {
                        class: "answer-list__author",
                        strong { "{answer.user_name}" }
                        if let Some(role) = answer.role_type {
                            span { " · {role.label()}" }
                        }
                        if answer.mine {
                            span { " (me)" }
                        }
                    }
                    p { "{answer.content}" }
                }
            }
        }
    }
}

/// `answered / required` with a progress bar. `percent` is already capped.
#[component]
pub fn AnswerProgress(answered: u32, required: u32, percent: u32) -> Element {
    rsx! {
        div {
            class: "progress-block",
            span { "{answered} / {required} answered" }
            div {
                class: "progress",
                div {
                    class: "progress__bar",
                    style: "width: {percent}%;",
                }
            }
        }
    }
}
