use dioxus::prelude::*;

use guards::{AppLayout, RequireAdmin, RequireAuth, SessionWatch};
use ui::{AuthProvider, ReloadFallback};
use views::{AdminQuestions, FamilyView, Home, Login, QuestionDetail, Questions, Settings, Signup};

mod guards;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SessionWatch)]
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[layout(RequireAuth)]
            #[layout(AppLayout)]
                #[route("/")]
                Home {},
                #[route("/family")]
                FamilyView {},
                #[route("/questions")]
                Questions {},
                #[route("/questions/:id")]
                QuestionDetail { id: i64 },
                #[route("/settings")]
                Settings {},
                #[layout(RequireAdmin)]
                    #[route("/admin/questions")]
                    AdminQuestions {},
                #[end_layout]
            #[end_layout]
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ErrorBoundary {
            handle_error: |errors: ErrorContext| {
                tracing::error!("Render failed: {:?}", errors);
                rsx! {
                    ReloadFallback { message: "The page could not be displayed. Reloading usually helps." }
                }
            },
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Unknown paths go home.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("No route for /{}", segments.join("/"));
    nav.replace(Route::Home {});
    rsx! {}
}
