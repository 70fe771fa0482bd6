use dioxus::prelude::*;
use store::models::history_counts;
use store::QuestionHistoryItem;
use ui::{use_gateway, LoadingSpinner};

use api::question::HISTORY_FAILED;

use crate::Route;

/// Past questions, newest first as the server returns them.
#[component]
pub fn Questions() -> Element {
    let gateway = use_gateway();
    let mut items = use_signal(Vec::<QuestionHistoryItem>::new);
    let mut error = use_signal(|| Option::<String>::None);

    let loader = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            match api::question::history(&gateway).await {
                Ok(loaded) => items.set(loaded),
                Err(e) => error.set(Some(e.user_message(HISTORY_FAILED))),
            }
        }
    });

    if loader.read().is_none() {
        return rsx! { LoadingSpinner {} };
    }

    let (completed, pending) = history_counts(&items.read());

    rsx! {
        h1 { "Question history" }
        p { "{completed} completed · {pending} in progress" }

        if let Some(err) = error() {
            div { class: "error", "{err}" }
        }

        if items.read().is_empty() && error().is_none() {
            p { "No questions yet." }
        }

        ul {
            class: "history",
            for item in items() {
                li {
                    key: "{item.family_question_id}",
                    class: "card",
                    Link {
                        to: Route::QuestionDetail { id: item.family_question_id },
                        if let Some(day) = item.sequence_number {
                            span { class: "badge", "Day {day}" }
                        }
                        if let Some(date) = item.assigned_date.as_deref() {
                            span { " {date}" }
                        }
                        p { "{item.question_text}" }
                        if item.completed {
                            span { class: "badge badge--done", "Completed" }
                        }
                    }
                }
            }
        }
    }
}
