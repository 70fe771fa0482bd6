//! # Wire models for the FamilyQ backend
//!
//! Every record the backend sends or receives, in the shape the REST API uses
//! (camelCase JSON). These types are `Serialize + Deserialize + PartialEq` so they
//! can live inside Dioxus signals and be compared cheaply on re-render.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserInfo`] | The authenticated user returned by `/users/me`, `/auth/login` and `/auth/signup`. |
//! | [`Family`] | The caller's family with its members and question progression flags. |
//! | [`FamilyCreated`] | The short record returned when a family is created. |
//! | [`FamilyQuestion`] | Today's question or a historical one, with my answer and (once completed) everyone's. |
//! | [`Answer`] | One member's answer to a family question. |
//! | [`QuestionHistoryItem`] | A row of the question history list. |
//! | [`AdminQuestion`] | A question in the global question pool (admin only). |
//! | [`ApiErrorBody`] | The backend's error envelope. |
//!
//! Request bodies ([`LoginRequest`], [`SignupRequest`], [`JoinFamilyRequest`],
//! [`AnswerRequest`], [`QuestionCreateRequest`]) are defined here as well so the
//! gateway and the validation layer agree on a single shape.

use serde::{Deserialize, Deserializer, Serialize};

/// Minimum family size before daily questions can start.
pub const MIN_MEMBERS_TO_START: u32 = 2;

/// A family member's role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleType {
    Father,
    Mother,
    Child,
}

impl RoleType {
    pub const ALL: [RoleType; 3] = [RoleType::Father, RoleType::Mother, RoleType::Child];

    /// Human label used on member cards and the signup form.
    pub fn label(&self) -> &'static str {
        match self {
            RoleType::Father => "Father",
            RoleType::Mother => "Mother",
            RoleType::Child => "Child",
        }
    }

    /// Wire value, e.g. `"FATHER"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::Father => "FATHER",
            RoleType::Mother => "MOTHER",
            RoleType::Child => "CHILD",
        }
    }

    /// Parse the wire value. Used by `<select>` inputs.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "FATHER" => Some(RoleType::Father),
            "MOTHER" => Some(RoleType::Mother),
            "CHILD" => Some(RoleType::Child),
            _ => None,
        }
    }
}

/// The authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub login_id: String,
    pub name: String,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub role_type: Option<RoleType>,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub family_id: Option<i64>,
    #[serde(default)]
    pub family_code: Option<String>,
}

impl UserInfo {
    pub fn has_family(&self) -> bool {
        self.family_id.is_some()
    }
}

/// One member of a family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub role_type: Option<RoleType>,
    #[serde(default)]
    pub birth_year: Option<i32>,
}

/// The caller's family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Family {
    #[serde(default)]
    pub family_id: Option<i64>,
    pub family_code: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub members: Vec<FamilyMember>,
    #[serde(default)]
    pub member_count: Option<u32>,
    #[serde(default)]
    pub questions_started: bool,
    #[serde(default)]
    pub ready_for_questions: bool,
    #[serde(default)]
    pub completed_questions: u32,
    #[serde(default)]
    pub total_answers: u32,
}

impl Family {
    /// Member count as reported by the server, falling back to the member list.
    pub fn member_count(&self) -> u32 {
        self.member_count
            .unwrap_or_else(|| self.members.len() as u32)
    }
}

/// Returned by `POST /families`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyCreated {
    pub family_id: i64,
    pub family_code: String,
}

/// One member's answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub answer_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub user_name: String,
    #[serde(default)]
    pub role_type: Option<RoleType>,
    pub content: String,
    #[serde(default)]
    pub mine: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A family question instance: today's question or a historical one.
///
/// `insight` is kept as raw JSON because the backend has shipped several shapes
/// over time; [`crate::insight::normalize`] reconciles them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyQuestion {
    pub family_question_id: i64,
    #[serde(default)]
    pub sequence_number: Option<u32>,
    pub question_text: String,
    #[serde(default)]
    pub assigned_date: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub my_answer: Option<Answer>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub answered_count: Option<u32>,
    #[serde(default)]
    pub required_member_count: Option<u32>,
    #[serde(default)]
    pub insight: Option<serde_json::Value>,
    #[serde(default)]
    pub insight_json: Option<String>,
}

impl FamilyQuestion {
    /// `(answered, required)` for the progress bar, or `None` when the server
    /// did not report a required count.
    pub fn progress(&self) -> Option<(u32, u32)> {
        let required = self.required_member_count.filter(|r| *r > 0)?;
        Some((self.answered_count.unwrap_or(0), required))
    }

    /// Progress as a percentage, capped at 100.
    pub fn progress_percent(&self) -> Option<u32> {
        self.progress()
            .map(|(answered, required)| (answered.saturating_mul(100) / required).min(100))
    }
}

/// A row of `GET /questions/history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionHistoryItem {
    pub family_question_id: i64,
    #[serde(default)]
    pub sequence_number: Option<u32>,
    pub question_text: String,
    #[serde(default)]
    pub assigned_date: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Lists the backend sends as `null` when empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Counts shown under the history list: `(completed, pending)`.
pub fn history_counts(items: &[QuestionHistoryItem]) -> (usize, usize) {
    let completed = items.iter().filter(|q| q.completed).count();
    (completed, items.len() - completed)
}

/// A question in the global pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminQuestion {
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub order_index: Option<i32>,
}

/// Error envelope returned by the backend on every non-2xx response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub login_id: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub login_id: String,
    pub password: String,
    pub name: String,
    pub birth_year: i32,
    pub role_type: RoleType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinFamilyRequest {
    pub family_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionCreateRequest {
    pub text: String,
    pub order_index: Option<i32>,
}
