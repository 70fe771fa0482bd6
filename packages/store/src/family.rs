//! # Family progression
//!
//! A signed-in user is always in exactly one [`FamilyPhase`]:
//!
//! | Phase | Condition | Allowed actions |
//! |-------|-----------|-----------------|
//! | [`NoFamily`](FamilyPhase::NoFamily) | `familyId` absent | create a family, join with a code |
//! | [`NotStarted`](FamilyPhase::NotStarted) | family present, `questionsStarted` false | start questions once ready |
//! | [`Active`](FamilyPhase::Active) | `questionsStarted` true | today's question flow |
//!
//! Phases only change in response to an explicit create / join / start call.

use crate::models::{Family, UserInfo, MIN_MEMBERS_TO_START};
use crate::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyPhase {
    NoFamily,
    NotStarted,
    Active,
}

impl FamilyPhase {
    /// The phase for a given membership flag and start flag.
    pub fn resolve(has_family: bool, questions_started: bool) -> Self {
        match (has_family, questions_started) {
            (false, _) => FamilyPhase::NoFamily,
            (true, false) => FamilyPhase::NotStarted,
            (true, true) => FamilyPhase::Active,
        }
    }

    /// The phase for a user and their (possibly not yet loaded) family.
    ///
    /// A family that has not been fetched yet counts as not started; views keep
    /// showing their loading state until it arrives.
    pub fn of(user: &UserInfo, family: Option<&Family>) -> Self {
        Self::resolve(
            user.has_family(),
            family.is_some_and(|f| f.questions_started),
        )
    }
}

/// Trim and uppercase a family code. Empty input is rejected.
pub fn normalize_join_code(input: &str) -> Result<String, ValidationError> {
    let code = input.trim().to_uppercase();
    if code.is_empty() {
        return Err(ValidationError::EmptyFamilyCode);
    }
    Ok(code)
}

/// Whether a family may start questions.
///
/// `readyForQuestions` is authoritative; the member count is checked as well so
/// a stale payload cannot enable the control for a single-member family.
pub fn is_ready(family: &Family) -> bool {
    family.ready_for_questions && family.member_count() >= MIN_MEMBERS_TO_START
}

/// State of the "start questions" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartControl {
    /// Questions already started; the control is not shown.
    Hidden,
    /// Fewer than two members.
    Disabled,
    /// A start request is pending.
    Pending,
    Enabled,
}

impl StartControl {
    pub fn for_family(family: &Family, in_flight: bool) -> Self {
        if family.questions_started {
            StartControl::Hidden
        } else if !is_ready(family) {
            StartControl::Disabled
        } else if in_flight {
            StartControl::Pending
        } else {
            StartControl::Enabled
        }
    }

    pub fn is_enabled(self) -> bool {
        self == StartControl::Enabled
    }

    /// Check the control before issuing a start request.
    pub fn check(self) -> Result<(), ValidationError> {
        match self {
            StartControl::Enabled => Ok(()),
            StartControl::Pending => Err(ValidationError::InFlight),
            StartControl::Hidden | StartControl::Disabled => Err(ValidationError::NotReadyForQuestions),
        }
    }

    /// Claim the in-flight flag for a start request. On success the flag is
    /// set and the returned control is [`StartControl::Enabled`]; a refused
    /// attempt leaves the flag untouched.
    pub fn begin(family: &Family, in_flight: &mut bool) -> Result<Self, ValidationError> {
        let control = Self::for_family(family, *in_flight);
        control.check()?;
        *in_flight = true;
        Ok(control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FamilyMember;

    fn family(members: u32, started: bool) -> Family {
        Family {
            family_id: Some(1),
            family_code: "ABC123".into(),
            members: (0..members)
                .map(|i| FamilyMember {
                    user_id: i as i64,
                    name: format!("m{i}"),
                    role_type: None,
                    birth_year: None,
                })
                .collect(),
            member_count: Some(members),
            questions_started: started,
            ready_for_questions: members >= MIN_MEMBERS_TO_START,
            ..Family::default()
        }
    }

    fn user(family_id: Option<i64>) -> UserInfo {
        UserInfo {
            id: 1,
            login_id: "a".into(),
            name: "A".into(),
            birth_year: None,
            role_type: None,
            admin: false,
            family_id,
            family_code: None,
        }
    }

    #[test]
    fn test_phase_is_total() {
        assert_eq!(FamilyPhase::resolve(false, false), FamilyPhase::NoFamily);
        assert_eq!(FamilyPhase::resolve(false, true), FamilyPhase::NoFamily);
        assert_eq!(FamilyPhase::resolve(true, false), FamilyPhase::NotStarted);
        assert_eq!(FamilyPhase::resolve(true, true), FamilyPhase::Active);
    }

    #[test]
    fn test_phase_of_user() {
        assert_eq!(FamilyPhase::of(&user(None), None), FamilyPhase::NoFamily);
        assert_eq!(FamilyPhase::of(&user(None), Some(&family(2, true))), FamilyPhase::NoFamily);
        assert_eq!(FamilyPhase::of(&user(Some(1)), None), FamilyPhase::NotStarted);
        assert_eq!(FamilyPhase::of(&user(Some(1)), Some(&family(2, false))), FamilyPhase::NotStarted);
        assert_eq!(FamilyPhase::of(&user(Some(1)), Some(&family(2, true))), FamilyPhase::Active);
    }

    #[test]
    fn test_join_code_normalization() {
        assert_eq!(normalize_join_code("abc123").unwrap(), "ABC123");
        assert_eq!(normalize_join_code("  xy9z \n").unwrap(), "XY9Z");
        assert_eq!(normalize_join_code("   "), Err(ValidationError::EmptyFamilyCode));
        assert_eq!(normalize_join_code(""), Err(ValidationError::EmptyFamilyCode));
    }

    #[test]
    fn test_start_control_follows_member_count() {
        let solo = family(1, false);
        assert_eq!(StartControl::for_family(&solo, false), StartControl::Disabled);
        assert_eq!(
            StartControl::for_family(&solo, false).check(),
            Err(ValidationError::NotReadyForQuestions)
        );

        let pair = family(2, false);
        assert!(StartControl::for_family(&pair, false).is_enabled());
        assert_eq!(StartControl::for_family(&pair, true), StartControl::Pending);
        assert_eq!(StartControl::for_family(&pair, true).check(), Err(ValidationError::InFlight));

        assert_eq!(StartControl::for_family(&family(3, true), false), StartControl::Hidden);
    }

    #[test]
    fn test_stale_ready_flag_is_not_trusted() {
        let mut stale = family(1, false);
        stale.ready_for_questions = true;
        assert!(!is_ready(&stale));
    }

    #[test]
    fn test_begin_claims_flag_once() {
        let ready = family(2, false);
        let mut in_flight = false;

        assert_eq!(StartControl::begin(&ready, &mut in_flight), Ok(StartControl::Enabled));
        assert!(in_flight);

        assert_eq!(
            StartControl::begin(&ready, &mut in_flight),
            Err(ValidationError::InFlight)
        );
        assert!(in_flight, "a refused second start must not clear the pending flag");
    }

    #[test]
    fn test_begin_refused_when_not_ready() {
        let mut in_flight = false;
        assert_eq!(
            StartControl::begin(&family(1, false), &mut in_flight),
            Err(ValidationError::NotReadyForQuestions)
        );
        assert!(!in_flight);
    }
}
