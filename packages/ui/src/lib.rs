//! This crate contains all shared UI for the FamilyQ client.

use dioxus::prelude::*;

pub mod components;
pub use components::{
    reload_page, AnswerList, AnswerProgress, InsightPanel, LoadingSpinner, ReloadFallback,
};

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const COMPONENTS_CSS: Asset = asset!("/assets/components.css");

mod navbar;
pub use navbar::BottomNav;

mod auth;
pub use auth::{
    clear_session_cookie, use_auth, use_auth_events, use_client_config, use_gateway, use_session,
    AuthProvider, SessionHandle,
};
