//! Client-side state for FamilyQ: wire models plus the pure state machines that
//! decide what a signed-in family member may see and do. Nothing in this crate
//! performs I/O; the `api` crate drives these types over HTTP.

pub mod family;
pub mod guard;
pub mod insight;
pub mod models;
pub mod question;
pub mod session;
pub mod validation;

pub use family::{normalize_join_code, FamilyPhase, StartControl};
pub use guard::{Guard, GuardDecision};
pub use insight::Insight;
pub use models::{
    AdminQuestion, Answer, AnswerRequest, ApiErrorBody, Family, FamilyCreated, FamilyMember,
    FamilyQuestion, JoinFamilyRequest, LoginRequest, QuestionCreateRequest, QuestionHistoryItem,
    RoleType, SignupRequest, UserInfo,
};
pub use question::{AnswerStage, QuestionView};
pub use session::{ActionResult, Session, SessionChange};
pub use validation::{SignupField, SignupForm, ValidationError};
