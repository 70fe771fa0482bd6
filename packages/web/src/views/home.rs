//! Home view: picks the onboarding, waiting-to-start or today's-question
//! sub-view from the family phase.

use dioxus::prelude::*;
use store::{FamilyPhase, FamilyQuestion};
use ui::{use_auth, use_client_config, use_gateway, AnswerProgress, LoadingSpinner};

use api::family::LOAD_FAILED;
use api::question::LOAD_FAILED as TODAY_FAILED;
use api::{FamilyOverview, Started};

use super::family::{FamilySetup, StartQuestions};
use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let gateway = use_gateway();
    let mut overview = use_signal(|| Option::<FamilyOverview>::None);
    let mut error = use_signal(|| Option::<String>::None);

    // Reloads whenever the session user changes, e.g. after joining a family
    let mut loader = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            let Some(user) = auth.read().user.clone() else {
                return;
            };
            match api::family::load_overview(&gateway, &user).await {
                Ok(loaded) => {
                    error.set(None);
                    overview.set(Some(loaded));
                }
                Err(e) => error.set(Some(e.user_message(LOAD_FAILED))),
            }
        }
    });

    let name = auth.read().user.as_ref().map(|u| u.name.clone()).unwrap_or_default();

    let Some(current) = overview() else {
        return rsx! {
            if let Some(err) = error() {
                div { class: "error", "{err}" }
                button { onclick: move |_| loader.restart(), "Try again" }
            } else {
                LoadingSpinner {}
            }
        };
    };

    let today_error = current
        .today_error
        .as_ref()
        .map(|e| e.user_message(TODAY_FAILED));

    rsx! {
        h1 { "Hello, {name}!" }

        if let Some(err) = error() {
            div { class: "error", "{err}" }
        }

        {match current.phase {
            FamilyPhase::NoFamily => rsx! {
                p { "Share a little of every day with your family." }
                FamilySetup { on_changed: move |_| loader.restart() }
            },
            FamilyPhase::NotStarted => rsx! {
                if let Some(family) = current.family.clone() {
                    section {
                        class: "card",
                        h3 { "Our family" }
                        p {
                            "Invite code: "
                            strong { "{family.family_code}" }
                        }
                        p { "{family.member_count()} members" }
                    }
                    StartQuestions {
                        family: family.clone(),
                        on_started: move |started: Started| {
                            overview.set(Some(FamilyOverview {
                                phase: FamilyPhase::Active,
                                family: Some(started.family),
                                today: started.today,
                                today_error: started.today_error,
                            }));
                        },
                    }
                }
            },
            FamilyPhase::Active => rsx! {
                if let Some(msg) = today_error.clone() {
                    div { class: "error", "{msg}" }
                }
                TodayCard { today: current.today.clone() }
                DebugControls { on_done: move |_| loader.restart() }
            },
        }}

        nav {
            class: "quick-links",
            Link { to: Route::Questions {}, "Question history" }
            Link { to: Route::FamilyView {}, "Family" }
        }
    }
}

#[component]
fn TodayCard(today: Option<FamilyQuestion>) -> Element {
    let Some(question) = today else {
        return rsx! {
            section {
                class: "card",
                p { "No question yet today." }
                p { "A new question arrives once everyone has answered." }
            }
        };
    };

    let answered = question.my_answer.is_some();
    let id = question.family_question_id;

    rsx! {
        section {
            class: "card",
            h2 { "Today's question" }
            if let Some(date) = question.assigned_date.as_deref() {
                span { class: "badge", "{date}" }
            }
            p { class: "question-text", "{question.question_text}" }

            if answered {
                p { "Answered" }
                if question.completed {
                    p { "Everyone has answered! The family insight is ready." }
                }
            } else {
                p { "Waiting for your answer" }
            }

            Link {
                to: Route::QuestionDetail { id },
                if answered { "View answers" } else { "Answer" }
            }

            if let Some((done, required)) = question.progress() {
                AnswerProgress {
                    answered: done,
                    required,
                    percent: question.progress_percent().unwrap_or_default(),
                }
            }
        }
    }
}

/// Refresh / skip-to-next buttons, only when enabled in configuration.
#[component]
fn DebugControls(on_done: EventHandler<()>) -> Element {
    let config = use_client_config();
    let auth = use_auth();
    let gateway = use_gateway();
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    if !config.debug.controls {
        return rsx! {};
    }
    let Some(user_id) = auth.read().user.as_ref().map(|u| u.id) else {
        return rsx! {};
    };

    let refresh_gateway = gateway.clone();
    let handle_refresh = move |_| {
        if *busy.peek() {
            return;
        }
        busy.set(true);
        let gateway = refresh_gateway.clone();
        spawn(async move {
            let result = api::admin::refresh_today(&gateway, user_id).await;
            busy.set(false);
            match result {
                Ok(()) => on_done.call(()),
                Err(e) => error.set(Some(e.user_message(api::admin::DEBUG_FAILED))),
            }
        });
    };

    let handle_skip = move |_| {
        if *busy.peek() {
            return;
        }
        busy.set(true);
        let gateway = gateway.clone();
        spawn(async move {
            let result = api::admin::skip_to_next(&gateway, user_id).await;
            busy.set(false);
            match result {
                Ok(()) => on_done.call(()),
                Err(e) => error.set(Some(e.user_message(api::admin::DEBUG_FAILED))),
            }
        });
    };

    rsx! {
        section {
            class: "card debug",
            h3 { "Debug" }
            if let Some(err) = error() {
                div { class: "error", "{err}" }
            }
            button { disabled: busy(), onclick: handle_refresh, "Refresh today's question" }
            button { disabled: busy(), onclick: handle_skip, "Skip to next question" }
        }
    }
}
