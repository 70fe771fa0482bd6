//! In-memory [`Backend`] used by the flow tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use store::{
    AdminQuestion, Answer, AnswerRequest, Family, FamilyCreated, FamilyQuestion, LoginRequest,
    QuestionCreateRequest, QuestionHistoryItem, SignupRequest, UserInfo,
};

use crate::backend::{ApiResult, Backend};
use crate::error::ApiError;

pub fn user(id: i64) -> UserInfo {
    UserInfo {
        id,
        login_id: format!("user{id}"),
        name: format!("User {id}"),
        birth_year: Some(1990),
        role_type: None,
        admin: false,
        family_id: None,
        family_code: None,
    }
}

pub fn family(member_count: u32, started: bool) -> Family {
    Family {
        family_id: Some(10),
        family_code: "ABC123".into(),
        member_count: Some(member_count),
        questions_started: started,
        ready_for_questions: member_count >= store::models::MIN_MEMBERS_TO_START,
        ..Family::default()
    }
}

pub fn question(id: i64, completed: bool) -> FamilyQuestion {
    FamilyQuestion {
        family_question_id: id,
        sequence_number: Some(1),
        question_text: "What made you laugh today?".into(),
        assigned_date: Some("2026-10-19".into()),
        completed_at: None,
        completed,
        my_answer: None,
        answers: Vec::new(),
        answered_count: Some(0),
        required_member_count: Some(2),
        insight: None,
        insight_json: None,
    }
}

/// Records every call by name and answers from canned state. Queued outcomes
/// apply to calls in order: a queued failure is returned instead of the
/// canned value, a queued pass lets that call through.
#[derive(Default)]
pub struct FakeBackend {
    pub calls: RefCell<Vec<String>>,
    pub user: RefCell<Option<UserInfo>>,
    pub login_user: RefCell<Option<UserInfo>>,
    pub family: RefCell<Option<Family>>,
    pub today: RefCell<Option<FamilyQuestion>>,
    pub admin_questions: RefCell<Vec<AdminQuestion>>,
    pub sent: RefCell<Vec<String>>,
    outcomes: RefCell<VecDeque<ApiResult<()>>>,
}

impl FakeBackend {
    pub fn signed_in(user: UserInfo) -> Self {
        let backend = Self::default();
        *backend.user.borrow_mut() = Some(user);
        backend
    }

    pub fn set_login_user(&self, user: UserInfo) {
        *self.login_user.borrow_mut() = Some(user);
    }

    pub fn fail_next(&self, error: ApiError) {
        self.outcomes.borrow_mut().push_back(Err(error));
    }

    pub fn pass_next(&self) {
        self.outcomes.borrow_mut().push_back(Ok(()));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, name: &str) -> ApiResult<()> {
        self.calls.borrow_mut().push(name.to_string());
        self.outcomes.borrow_mut().pop_front().unwrap_or(Ok(()))
    }

    fn not_found() -> ApiError {
        ApiError::Status {
            status: 404,
            message: None,
        }
    }
}

impl Backend for FakeBackend {
    async fn current_user(&self) -> ApiResult<UserInfo> {
        self.record("current_user")?;
        self.user
            .borrow()
            .clone()
            .ok_or(ApiError::Unauthorized { message: None })
    }

    async fn login(&self, _request: &LoginRequest) -> ApiResult<UserInfo> {
        self.record("login")?;
        let user = self.login_user.borrow().clone().ok_or(ApiError::Unauthorized {
            message: None,
        })?;
        *self.user.borrow_mut() = Some(user.clone());
        Ok(user)
    }

    async fn signup(&self, request: &SignupRequest) -> ApiResult<UserInfo> {
        self.record("signup")?;
        let mut created = user(99);
        created.login_id = request.login_id.clone();
        created.name = request.name.clone();
        *self.user.borrow_mut() = Some(created.clone());
        Ok(created)
    }

    async fn logout(&self) -> ApiResult<()> {
        self.record("logout")?;
        *self.user.borrow_mut() = None;
        Ok(())
    }

    async fn create_family(&self) -> ApiResult<FamilyCreated> {
        self.record("create_family")?;
        let created = family(1, false);
        if let Some(user) = self.user.borrow_mut().as_mut() {
            user.family_id = created.family_id;
            user.family_code = Some(created.family_code.clone());
        }
        *self.family.borrow_mut() = Some(created.clone());
        Ok(FamilyCreated {
            family_id: created.family_id.unwrap_or_default(),
            family_code: created.family_code,
        })
    }

    async fn join_family(&self, family_code: &str) -> ApiResult<Family> {
        self.record("join_family")?;
        self.sent.borrow_mut().push(family_code.to_string());
        let mut joined = family(2, false);
        joined.family_code = family_code.to_string();
        if let Some(user) = self.user.borrow_mut().as_mut() {
            user.family_id = joined.family_id;
            user.family_code = Some(joined.family_code.clone());
        }
        *self.family.borrow_mut() = Some(joined.clone());
        Ok(joined)
    }

    async fn my_family(&self) -> ApiResult<Family> {
        self.record("my_family")?;
        self.family.borrow().clone().ok_or_else(Self::not_found)
    }

    async fn start_questions(&self) -> ApiResult<Family> {
        self.record("start_questions")?;
        let mut family = self.family.borrow().clone().ok_or_else(Self::not_found)?;
        family.questions_started = true;
        *self.family.borrow_mut() = Some(family.clone());
        Ok(family)
    }

    async fn today_question(&self) -> ApiResult<FamilyQuestion> {
        self.record("today_question")?;
        self.today.borrow().clone().ok_or(ApiError::Status {
            status: 400,
            message: Some("No question assigned".into()),
        })
    }

    async fn question_history(&self) -> ApiResult<Vec<QuestionHistoryItem>> {
        self.record("question_history")?;
        Ok(self
            .today
            .borrow()
            .iter()
            .map(|q| QuestionHistoryItem {
                family_question_id: q.family_question_id,
                sequence_number: q.sequence_number,
                question_text: q.question_text.clone(),
                assigned_date: q.assigned_date.clone(),
                completed_at: q.completed_at.clone(),
                completed: q.completed,
            })
            .collect())
    }

    async fn question_detail(&self, family_question_id: i64) -> ApiResult<FamilyQuestion> {
        self.record("question_detail")?;
        self.today
            .borrow()
            .clone()
            .filter(|q| q.family_question_id == family_question_id)
            .ok_or_else(Self::not_found)
    }

    async fn submit_answer(&self, family_question_id: i64, request: &AnswerRequest) -> ApiResult<Answer> {
        self.record("submit_answer")?;
        self.sent.borrow_mut().push(request.content.clone());
        let answer = Answer {
            answer_id: 1,
            user_id: self.user.borrow().as_ref().map(|u| u.id),
            user_name: "me".into(),
            role_type: None,
            content: request.content.clone(),
            mine: true,
            created_at: None,
        };
        let mut today = self.today.borrow_mut();
        let question = today
            .as_mut()
            .filter(|q| q.family_question_id == family_question_id)
            .ok_or_else(Self::not_found)?;
        question.my_answer = Some(answer.clone());
        question.answered_count = Some(1);
        Ok(answer)
    }

    async fn admin_questions(&self) -> ApiResult<Vec<AdminQuestion>> {
        self.record("admin_questions")?;
        Ok(self.admin_questions.borrow().clone())
    }

    async fn create_admin_question(&self, request: &QuestionCreateRequest) -> ApiResult<AdminQuestion> {
        self.record("create_admin_question")?;
        let mut questions = self.admin_questions.borrow_mut();
        let question = AdminQuestion {
            id: questions.len() as i64 + 1,
            text: request.text.clone(),
            order_index: request.order_index.or(Some(questions.len() as i32 + 1)),
        };
        questions.push(question.clone());
        Ok(question)
    }

    async fn delete_admin_question(&self, question_id: i64) -> ApiResult<()> {
        self.record("delete_admin_question")?;
        self.admin_questions.borrow_mut().retain(|q| q.id != question_id);
        Ok(())
    }

    async fn refresh_question(&self, _user_id: i64) -> ApiResult<()> {
        self.record("refresh_question")
    }

    async fn skip_to_next_question(&self, _user_id: i64) -> ApiResult<()> {
        self.record("skip_to_next_question")
    }
}
