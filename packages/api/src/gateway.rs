//! # HTTP gateway
//!
//! [`Gateway`] is the single configured client for the FamilyQ REST API. It:
//!
//! - resolves every path against one base URL (`<origin>/api`);
//! - sends session credentials with every request (`credentials: include` in the
//!   browser, a cookie jar on native targets);
//! - turns non-2xx responses into [`ApiError`], preserving the server message;
//! - on HTTP 401 emits an [`AuthEvent::Unauthorized`] on the channel returned by
//!   [`auth_events`], so the session layer can clear itself and redirect.
//!
//! The gateway never navigates, retries or queues on its own.

use std::rc::Rc;

use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use reqwest::{Method, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use store::{
    AdminQuestion, Answer, AnswerRequest, Family, FamilyCreated, FamilyQuestion,
    JoinFamilyRequest, LoginRequest, QuestionCreateRequest, QuestionHistoryItem, SignupRequest,
    UserInfo,
};

use crate::backend::{ApiResult, Backend};
use crate::config::ClientConfig;
use crate::error::ApiError;

/// Authentication events emitted by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// A request was rejected with HTTP 401.
    Unauthorized { path: String },
}

pub type AuthEventSender = UnboundedSender<AuthEvent>;
pub type AuthEvents = UnboundedReceiver<AuthEvent>;

/// Create the channel the gateway reports auth events on.
pub fn auth_events() -> (AuthEventSender, AuthEvents) {
    unbounded()
}

#[derive(Clone)]
pub struct Gateway {
    client: reqwest::Client,
    base_url: Rc<str>,
    events: Option<AuthEventSender>,
}

impl Gateway {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url()?;
        Ok(Self {
            client: build_client()?,
            base_url: base_url.into(),
            events: None,
        })
    }

    /// Report 401 responses on `sender`.
    pub fn with_auth_events(mut self, sender: AuthEventSender) -> Self {
        self.events = Some(sender);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{} {}", method, url);
        let builder = self.client.request(method, url);
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    async fn send(&self, path: &str, builder: RequestBuilder) -> ApiResult<String> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!("Request to {} failed: {}", path, e);
            ApiError::from(e)
        })?;
        let status = response.status();
        let body = response.text().await;

        if status.is_success() {
            return body.map_err(|e| {
                tracing::error!("Reading response from {} failed: {}", path, e);
                ApiError::from(e)
            });
        }

        let body = body.unwrap_or_default();
        let error = ApiError::from_response(status.as_u16(), &body);
        if error.is_unauthorized() {
            tracing::warn!("Unauthorized response from {}", path);
            self.emit(AuthEvent::Unauthorized {
                path: path.to_string(),
            });
        } else {
            tracing::debug!("{} returned {}", path, status);
        }
        Err(error)
    }

    fn emit(&self, event: AuthEvent) {
        if let Some(events) = &self.events {
            // A closed receiver means nobody is listening any more.
            let _ = events.unbounded_send(event);
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let body = self.send(path, self.request(Method::GET, path)).await?;
        decode(&body)
    }

    async fn post<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let body = self.send(path, self.request(Method::POST, path)).await?;
        decode(&body)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, payload: &B) -> ApiResult<T> {
        let builder = self.request(Method::POST, path).json(payload);
        let body = self.send(path, builder).await?;
        decode(&body)
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send(path, self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .map_err(|e| ApiError::InvalidConfig(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn build_client() -> Result<reqwest::Client, ApiError> {
    Ok(reqwest::Client::new())
}

/// Decode a JSON body. An empty body decodes as JSON `null`, so unit and
/// optional targets accept `204 No Content`.
fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    let raw = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

impl Backend for Gateway {
    async fn current_user(&self) -> ApiResult<UserInfo> {
        self.get("/users/me").await
    }

    async fn login(&self, request: &LoginRequest) -> ApiResult<UserInfo> {
        self.post_json("/auth/login", request).await
    }

    async fn signup(&self, request: &SignupRequest) -> ApiResult<UserInfo> {
        self.post_json("/auth/signup", request).await
    }

    async fn logout(&self) -> ApiResult<()> {
        let _: IgnoredAny = self.post("/auth/logout").await?;
        Ok(())
    }

    async fn create_family(&self) -> ApiResult<FamilyCreated> {
        self.post("/families").await
    }

    async fn join_family(&self, family_code: &str) -> ApiResult<Family> {
        let request = JoinFamilyRequest {
            family_code: family_code.to_string(),
        };
        self.post_json("/families/join", &request).await
    }

    async fn my_family(&self) -> ApiResult<Family> {
        self.get("/families/me").await
    }

    async fn start_questions(&self) -> ApiResult<Family> {
        self.post("/families/start-questions").await
    }

    async fn today_question(&self) -> ApiResult<FamilyQuestion> {
        self.get("/questions/today").await
    }

    async fn question_history(&self) -> ApiResult<Vec<QuestionHistoryItem>> {
        self.get("/questions/history").await
    }

    async fn question_detail(&self, family_question_id: i64) -> ApiResult<FamilyQuestion> {
        self.get(&format!("/questions/{family_question_id}")).await
    }

    async fn submit_answer(&self, family_question_id: i64, request: &AnswerRequest) -> ApiResult<Answer> {
        self.post_json(&format!("/questions/{family_question_id}/answers"), request)
            .await
    }

    async fn admin_questions(&self) -> ApiResult<Vec<AdminQuestion>> {
        self.get("/admin/questions").await
    }

    async fn create_admin_question(&self, request: &QuestionCreateRequest) -> ApiResult<AdminQuestion> {
        self.post_json("/admin/questions", request).await
    }

    async fn delete_admin_question(&self, question_id: i64) -> ApiResult<()> {
        self.delete(&format!("/admin/questions/{question_id}")).await
    }

    async fn refresh_question(&self, user_id: i64) -> ApiResult<()> {
        let _: IgnoredAny = self.post(&format!("/admin/questions/refresh/{user_id}")).await?;
        Ok(())
    }

    async fn skip_to_next_question(&self, user_id: i64) -> ApiResult<()> {
        let _: IgnoredAny = self
            .post(&format!("/admin/questions/skip-to-next/{user_id}"))
            .await?;
        Ok(())
    }
}
