//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns the one [`Session`] signal for the app, the configured
//! [`Gateway`] and the receiving end of the gateway's auth events. Views reach
//! them through [`use_auth`], [`use_gateway`] and [`use_session`]; nothing is a
//! global.

use api::{ApiError, AuthEvent, ClientConfig, Gateway};
use dioxus::prelude::*;
use futures::StreamExt;
use store::{ActionResult, LoginRequest, Session, SessionChange, SignupRequest};

/// Get the current session. The signal updates on login, logout and 401.
pub fn use_auth() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// The configured HTTP gateway.
pub fn use_gateway() -> Gateway {
    use_context::<Gateway>()
}

pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// The latest unhandled auth event. Whoever owns navigation takes it and
/// decides whether to redirect.
pub fn use_auth_events() -> Signal<Option<AuthEvent>> {
    use_context::<Signal<Option<AuthEvent>>>()
}

/// Session operations bound to the app's session signal and gateway.
#[derive(Clone)]
pub struct SessionHandle {
    session: Signal<Session>,
    gateway: Gateway,
}

impl SessionHandle {
    pub fn apply(&self, change: SessionChange) {
        let mut session = self.session;
        session.write().apply(change);
    }

    pub async fn login(&self, request: &LoginRequest) -> ActionResult {
        let outcome = api::session::login(&self.gateway, request).await;
        self.apply(outcome.change);
        outcome.result
    }

    pub async fn signup(&self, request: &SignupRequest) -> ActionResult {
        let outcome = api::session::signup(&self.gateway, request).await;
        self.apply(outcome.change);
        outcome.result
    }

    pub async fn logout(&self) -> ActionResult {
        let outcome = api::session::logout(&self.gateway).await;
        self.apply(outcome.change);
        outcome.result
    }
}

pub fn use_session() -> SessionHandle {
    SessionHandle {
        session: use_auth(),
        gateway: use_gateway(),
    }
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut session = use_signal(Session::default);
    let mut pending = use_signal(|| Option::<AuthEvent>::None);
    let config = use_hook(ClientConfig::from_env);

    let gateway = use_hook(|| {
        let (events, mut receiver) = api::auth_events();
        spawn(async move {
            while let Some(event) = receiver.next().await {
                pending.set(Some(event));
            }
        });
        Gateway::new(&config).map(|g| g.with_auth_events(events))
    });

    use_context_provider(|| session);
    use_context_provider(|| pending);
    use_context_provider(|| config.clone());

    let gateway = match gateway {
        Ok(gateway) => gateway,
        Err(e) => return render_config_error(e),
    };
    use_context_provider(|| gateway.clone());

    // Resolve the session once on mount
    let _ = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            session.write().begin_probe();
            let change = api::session::probe_session(&gateway).await;
            session.write().apply(change);
        }
    });

    rsx! {
        {children}
    }
}

fn render_config_error(error: ApiError) -> Element {
    tracing::error!("Client misconfigured: {}", error);
    rsx! {
        div {
            class: "config-error",
            h1 { "FamilyQ is not configured" }
            p { "{error}" }
        }
    }
}

/// Name of the backend's session cookie.
pub const SESSION_COOKIE: &str = "JSESSIONID";

/// Expire the session cookie visible to this origin. The backend also drops
/// its side of the session on 401, so this only keeps the browser tidy.
pub fn clear_session_cookie() {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok());
        if let Some(document) = document {
            let expired = format!("{SESSION_COOKIE}=; Path=/; Max-Age=0");
            if let Err(e) = document.set_cookie(&expired) {
                tracing::debug!("Could not clear session cookie: {:?}", e);
            }
        }
    }
}
