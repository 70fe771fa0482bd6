//! The backend surface the client flows are written against.
//!
//! [`crate::Gateway`] is the production implementation; tests substitute an
//! in-memory one. Each method is a single attempt: no retries, no queueing.

use std::future::Future;

use store::{
    AdminQuestion, Answer, AnswerRequest, Family, FamilyCreated, FamilyQuestion, LoginRequest,
    QuestionCreateRequest, QuestionHistoryItem, SignupRequest, UserInfo,
};

use crate::error::ApiError;

pub type ApiResult<T> = Result<T, ApiError>;

pub trait Backend {
    // Session lifecycle
    fn current_user(&self) -> impl Future<Output = ApiResult<UserInfo>>;
    fn login(&self, request: &LoginRequest) -> impl Future<Output = ApiResult<UserInfo>>;
    fn signup(&self, request: &SignupRequest) -> impl Future<Output = ApiResult<UserInfo>>;
    fn logout(&self) -> impl Future<Output = ApiResult<()>>;

    // Family lifecycle
    fn create_family(&self) -> impl Future<Output = ApiResult<FamilyCreated>>;
    fn join_family(&self, family_code: &str) -> impl Future<Output = ApiResult<Family>>;
    fn my_family(&self) -> impl Future<Output = ApiResult<Family>>;
    fn start_questions(&self) -> impl Future<Output = ApiResult<Family>>;

    // Daily question flow
    fn today_question(&self) -> impl Future<Output = ApiResult<FamilyQuestion>>;
    fn question_history(&self) -> impl Future<Output = ApiResult<Vec<QuestionHistoryItem>>>;
    fn question_detail(&self, family_question_id: i64) -> impl Future<Output = ApiResult<FamilyQuestion>>;
    fn submit_answer(
        &self,
        family_question_id: i64,
        request: &AnswerRequest,
    ) -> impl Future<Output = ApiResult<Answer>>;

    // Administration and debug tooling
    fn admin_questions(&self) -> impl Future<Output = ApiResult<Vec<AdminQuestion>>>;
    fn create_admin_question(
        &self,
        request: &QuestionCreateRequest,
    ) -> impl Future<Output = ApiResult<AdminQuestion>>;
    fn delete_admin_question(&self, question_id: i64) -> impl Future<Output = ApiResult<()>>;
    fn refresh_question(&self, user_id: i64) -> impl Future<Output = ApiResult<()>>;
    fn skip_to_next_question(&self, user_id: i64) -> impl Future<Output = ApiResult<()>>;
}
