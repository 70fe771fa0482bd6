//! Route guard decisions.
//!
//! Guards compose by nesting: the admin guard is only consulted after the
//! authenticated guard has rendered, so it never sees a loading session in
//! practice. It still answers [`GuardDecision::Loading`] for one so a
//! mis-nested guard cannot redirect an admin away while the probe is in flight.

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Authenticated,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show a neutral loading indicator.
    Loading,
    /// Render the nested views.
    Render,
    /// Navigate to the login view.
    RedirectToLogin,
    /// Navigate to the home view.
    RedirectHome,
}

impl Guard {
    pub fn decide(self, session: &Session) -> GuardDecision {
        if session.loading {
            return GuardDecision::Loading;
        }
        match self {
            Guard::Authenticated if session.is_authenticated() => GuardDecision::Render,
            Guard::Authenticated => GuardDecision::RedirectToLogin,
            Guard::Admin if session.is_admin() => GuardDecision::Render,
            Guard::Admin => GuardDecision::RedirectHome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserInfo;

    fn signed_in(admin: bool) -> Session {
        let mut session = Session::default();
        session.sign_in(UserInfo {
            id: 9,
            login_id: "kid".into(),
            name: "Park".into(),
            birth_year: Some(2010),
            role_type: None,
            admin,
            family_id: Some(1),
            family_code: Some("ABC123".into()),
        });
        session
    }

    #[test]
    fn test_loading_blocks_both_guards() {
        let mut session = signed_in(true);
        session.begin_probe();
        assert_eq!(Guard::Authenticated.decide(&session), GuardDecision::Loading);
        assert_eq!(Guard::Admin.decide(&session), GuardDecision::Loading);
    }

    #[test]
    fn test_anonymous_is_sent_to_login() {
        let mut session = Session::default();
        session.sign_out();
        assert_eq!(Guard::Authenticated.decide(&session), GuardDecision::RedirectToLogin);
    }

    #[test]
    fn test_admin_guard() {
        assert_eq!(Guard::Authenticated.decide(&signed_in(false)), GuardDecision::Render);
        assert_eq!(Guard::Admin.decide(&signed_in(false)), GuardDecision::RedirectHome);
        assert_eq!(Guard::Admin.decide(&signed_in(true)), GuardDecision::Render);
    }
}
