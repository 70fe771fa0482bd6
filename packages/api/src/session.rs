//! Session operations.
//!
//! Each operation talks to a [`Backend`] and returns a [`SessionChange`] for
//! the caller to apply to its [`store::Session`], plus an [`ActionResult`] for
//! the view that triggered it. Nothing here propagates an error: failures
//! become a change and a failure result.

use store::{ActionResult, LoginRequest, SessionChange, SignupRequest};

use crate::backend::Backend;
use crate::error::ApiError;
use crate::gateway::AuthEvent;

pub const LOGIN_FAILED: &str = "Login failed. Please check your ID and password.";
pub const SIGNUP_FAILED: &str = "Sign up failed. Please try again.";
pub const LOGOUT_FAILED: &str = "Logout failed. Please try again.";
pub const SESSION_FAILED: &str = "Could not load your session.";

/// What a session operation did.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub change: SessionChange,
    pub result: ActionResult,
}

impl Outcome {
    fn failed(error: &ApiError, fallback: &str) -> Self {
        let message = error.user_message(fallback);
        Self {
            change: SessionChange::ActionFailed(message.clone()),
            result: ActionResult::Failure(message),
        }
    }
}

/// Resolve the initial session. A 401 means "nobody signed in", not an error.
pub async fn probe_session<B: Backend>(backend: &B) -> SessionChange {
    match backend.current_user().await {
        Ok(user) => {
            tracing::info!("Session restored for {}", user.login_id);
            SessionChange::SignedIn(user)
        }
        Err(e) if e.is_unauthorized() => {
            tracing::debug!("No active session");
            SessionChange::SignedOut
        }
        Err(e) => {
            tracing::error!("Session probe failed: {}", e);
            SessionChange::ProbeFailed(e.user_message(SESSION_FAILED))
        }
    }
}

/// Re-fetch the current user, e.g. after the family changed.
pub async fn refresh_user<B: Backend>(backend: &B) -> SessionChange {
    match backend.current_user().await {
        Ok(user) => SessionChange::SignedIn(user),
        Err(e) if e.is_unauthorized() => SessionChange::SignedOut,
        Err(e) => {
            tracing::warn!("Failed to refresh user: {}", e);
            SessionChange::ActionFailed(e.user_message(SESSION_FAILED))
        }
    }
}

pub async fn login<B: Backend>(backend: &B, request: &LoginRequest) -> Outcome {
    match backend.login(request).await {
        Ok(user) => {
            tracing::info!("Logged in as {}", user.login_id);
            Outcome {
                change: SessionChange::SignedIn(user),
                result: ActionResult::Success,
            }
        }
        Err(e) => {
            tracing::warn!("Login failed: {}", e);
            Outcome::failed(&e, LOGIN_FAILED)
        }
    }
}

pub async fn signup<B: Backend>(backend: &B, request: &SignupRequest) -> Outcome {
    match backend.signup(request).await {
        Ok(user) => {
            tracing::info!("Signed up as {}", user.login_id);
            Outcome {
                change: SessionChange::SignedIn(user),
                result: ActionResult::Success,
            }
        }
        Err(e) => {
            tracing::warn!("Signup failed: {}", e);
            Outcome::failed(&e, SIGNUP_FAILED)
        }
    }
}

pub async fn logout<B: Backend>(backend: &B) -> Outcome {
    match backend.logout().await {
        Ok(()) => {
            tracing::info!("Logged out");
            Outcome {
                change: SessionChange::SignedOut,
                result: ActionResult::Success,
            }
        }
        Err(e) => {
            tracing::warn!("Logout failed: {}", e);
            Outcome::failed(&e, LOGOUT_FAILED)
        }
    }
}

/// React to a gateway auth event. Returns the session change plus whether the
/// view shown at `current_path` should navigate to the login view.
pub fn on_auth_event(event: &AuthEvent, current_path: &str) -> (SessionChange, bool) {
    match event {
        AuthEvent::Unauthorized { path } => {
            tracing::warn!("Session expired (request to {})", path);
            (
                SessionChange::SignedOut,
                store::session::redirect_on_unauthorized(current_path),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{user, FakeBackend};
    use store::Session;

    #[tokio::test]
    async fn test_probe_signed_in() {
        let backend = FakeBackend::signed_in(user(1));
        let mut session = Session::default();
        session.apply(probe_session(&backend).await);
        assert!(session.is_authenticated());
        assert!(!session.loading);
    }

    #[tokio::test]
    async fn test_probe_unauthorized_is_not_an_error() {
        let backend = FakeBackend::default();
        let mut session = Session::default();
        session.apply(probe_session(&backend).await);
        assert!(!session.is_authenticated());
        assert!(!session.loading);
        assert!(session.error.is_none());
    }

    #[tokio::test]
    async fn test_probe_other_failure_sets_error() {
        let backend = FakeBackend::default();
        backend.fail_next(ApiError::Transport("connection refused".into()));
        let mut session = Session::default();
        session.apply(probe_session(&backend).await);
        assert!(!session.loading);
        assert_eq!(session.error.as_deref(), Some(SESSION_FAILED));
    }

    #[tokio::test]
    async fn test_login_failure_prefers_server_message() {
        let backend = FakeBackend::default();
        backend.fail_next(ApiError::Status {
            status: 400,
            message: Some("Wrong password".into()),
        });
        let request = LoginRequest {
            login_id: "kid".into(),
            password: "secret1".into(),
        };
        let outcome = login(&backend, &request).await;
        assert_eq!(outcome.result.error(), Some("Wrong password"));

        backend.fail_next(ApiError::Status {
            status: 500,
            message: None,
        });
        let outcome = login(&backend, &request).await;
        assert_eq!(outcome.result.error(), Some(LOGIN_FAILED));
    }

    #[tokio::test]
    async fn test_login_then_logout() {
        let backend = FakeBackend::default();
        backend.set_login_user(user(4));
        let mut session = Session::default();

        let request = LoginRequest {
            login_id: "kid".into(),
            password: "secret1".into(),
        };
        let outcome = login(&backend, &request).await;
        assert!(outcome.result.is_success());
        session.apply(outcome.change);
        assert_eq!(session.user.as_ref().map(|u| u.id), Some(4));

        let outcome = logout(&backend).await;
        assert!(outcome.result.is_success());
        session.apply(outcome.change);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_failure_keeps_user() {
        let backend = FakeBackend::signed_in(user(2));
        let mut session = Session::default();
        session.apply(probe_session(&backend).await);

        backend.fail_next(ApiError::Transport("offline".into()));
        let outcome = logout(&backend).await;
        assert_eq!(outcome.result.error(), Some(LOGOUT_FAILED));
        session.apply(outcome.change);
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_auth_event_redirects_except_on_login() {
        let event = AuthEvent::Unauthorized {
            path: "/questions/today".into(),
        };
        let (change, redirect) = on_auth_event(&event, "/");
        assert_eq!(change, SessionChange::SignedOut);
        assert!(redirect);

        let (_, redirect) = on_auth_event(&event, "/login");
        assert!(!redirect);
    }
}
