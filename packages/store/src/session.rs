//! # Session state
//!
//! [`Session`] is the client's view of who is signed in. It starts out loading,
//! is resolved exactly once by the initial probe and afterwards changes only
//! through the session operations in the `api` crate or an auth event.
//!
//! Backend calls produce a [`SessionChange`], which the UI applies to the
//! `Session` held in its signal with [`Session::apply`]. Keeping the change
//! separate from the call means no borrow of the signal is held across an
//! await, and the transitions can be unit tested without a rendering runtime.

use crate::models::UserInfo;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: Option<UserInfo>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            error: None,
        }
    }
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.admin)
    }

    /// Mark a probe as started.
    pub fn begin_probe(&mut self) {
        self.loading = true;
    }

    /// A user was returned by the backend.
    pub fn sign_in(&mut self, user: UserInfo) {
        self.user = Some(user);
        self.error = None;
        self.loading = false;
    }

    /// The backend reported no session (401) or the user logged out.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.error = None;
        self.loading = false;
    }

    /// A probe failed for a reason other than a missing session.
    pub fn probe_failed(&mut self, message: String) {
        self.user = None;
        self.error = Some(message);
        self.loading = false;
    }

    /// A login/signup/logout attempt or a refresh failed. The current user is kept.
    pub fn action_failed(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn apply(&mut self, change: SessionChange) {
        match change {
            SessionChange::SignedIn(user) => self.sign_in(user),
            SessionChange::SignedOut => self.sign_out(),
            SessionChange::ProbeFailed(message) => self.probe_failed(message),
            SessionChange::ActionFailed(message) => self.action_failed(message),
        }
    }
}

/// A transition produced by a session operation.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionChange {
    SignedIn(UserInfo),
    /// No session on the server: logged out, or a 401 was observed.
    SignedOut,
    /// The initial probe failed for a reason other than a missing session.
    ProbeFailed(String),
    /// An explicit action failed; the signed-in user is unaffected.
    ActionFailed(String),
}

/// Discriminated result of a session operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    Success,
    Failure(String),
}

impl ActionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionResult::Success)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ActionResult::Success => None,
            ActionResult::Failure(message) => Some(message),
        }
    }
}

pub const LOGIN_PATH: &str = "/login";

/// Whether a 401 observed while `current_path` is shown should navigate to the
/// login view. On the login view itself a 401 is the normal outcome of a bad
/// password and must not bounce the page.
pub fn redirect_on_unauthorized(current_path: &str) -> bool {
    !current_path.contains(LOGIN_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(admin: bool) -> UserInfo {
        UserInfo {
            id: 1,
            login_id: "dad".into(),
            name: "Lee".into(),
            birth_year: Some(1970),
            role_type: None,
            admin,
            family_id: None,
            family_code: None,
        }
    }

    #[test]
    fn test_session_starts_loading() {
        let session = Session::default();
        assert!(session.loading);
        assert!(session.user.is_none());
        assert!(session.error.is_none());
    }

    #[test]
    fn test_sign_in_and_out() {
        let mut session = Session::default();
        session.action_failed("old".into());
        session.sign_in(user(true));
        assert!(session.is_authenticated());
        assert!(session.is_admin());
        assert!(!session.loading);
        assert!(session.error.is_none());

        session.sign_out();
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn test_action_failure_keeps_user() {
        let mut session = Session::default();
        session.sign_in(user(false));
        session.action_failed("logout failed".into());
        assert!(session.is_authenticated());
        assert_eq!(session.error.as_deref(), Some("logout failed"));
    }

    #[test]
    fn test_probe_failure_sets_error() {
        let mut session = Session::default();
        session.probe_failed("network down".into());
        assert!(!session.loading);
        assert!(session.user.is_none());
        assert_eq!(session.error.as_deref(), Some("network down"));
    }

    #[test]
    fn test_apply_changes() {
        let mut session = Session::default();
        session.apply(SessionChange::SignedIn(user(false)));
        assert!(session.is_authenticated());
        session.apply(SessionChange::ActionFailed("nope".into()));
        assert!(session.is_authenticated());
        session.apply(SessionChange::SignedOut);
        assert!(!session.is_authenticated());
        assert!(session.error.is_none());
        session.apply(SessionChange::ProbeFailed("down".into()));
        assert_eq!(session.error.as_deref(), Some("down"));
    }

    #[test]
    fn test_redirect_policy() {
        assert!(redirect_on_unauthorized("/"));
        assert!(redirect_on_unauthorized("/questions/3"));
        assert!(redirect_on_unauthorized("/admin/questions"));
        assert!(!redirect_on_unauthorized("/login"));
        assert!(!redirect_on_unauthorized("/login?next=/"));
    }

    #[test]
    fn test_action_result() {
        assert!(ActionResult::Success.is_success());
        let failure = ActionResult::Failure("bad password".into());
        assert!(!failure.is_success());
        assert_eq!(failure.error(), Some("bad password"));
    }
}
