//! Admin question management and the debug controls for the daily question.

use store::validation::validate_question_create;
use store::AdminQuestion;

use crate::backend::{ApiResult, Backend};

pub const LIST_FAILED: &str = "Could not load questions.";
pub const CREATE_FAILED: &str = "Could not add the question.";
pub const DELETE_FAILED: &str = "Could not delete the question.";
pub const DEBUG_FAILED: &str = "Debug action failed.";

pub async fn list<B: Backend>(backend: &B) -> ApiResult<Vec<AdminQuestion>> {
    let mut questions = backend.admin_questions().await?;
    questions.sort_by_key(|q| (q.order_index.unwrap_or(i32::MAX), q.id));
    Ok(questions)
}

/// Add a question to the pool. `order_index` is the raw form input; blank
/// lets the server choose.
pub async fn create<B: Backend>(backend: &B, text: &str, order_index: &str) -> ApiResult<AdminQuestion> {
    let request = validate_question_create(text, order_index)?;
    let question = backend.create_admin_question(&request).await?;
    tracing::info!("Added question {}", question.id);
    Ok(question)
}

pub async fn delete<B: Backend>(backend: &B, question_id: i64) -> ApiResult<()> {
    backend.delete_admin_question(question_id).await?;
    tracing::info!("Deleted question {}", question_id);
    Ok(())
}

/// Reassign today's question for `user_id`.
pub async fn refresh_today<B: Backend>(backend: &B, user_id: i64) -> ApiResult<()> {
    tracing::debug!("Refreshing today's question for user {}", user_id);
    backend.refresh_question(user_id).await
}

/// Advance `user_id`'s family to the next question.
pub async fn skip_to_next<B: Backend>(backend: &B, user_id: i64) -> ApiResult<()> {
    tracing::debug!("Skipping to the next question for user {}", user_id);
    backend.skip_to_next_question(user_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::testing::FakeBackend;
    use store::ValidationError;

    #[tokio::test]
    async fn test_create_trims_and_validates() {
        let backend = FakeBackend::default();

        let err = create(&backend, "   ", "").await.unwrap_err();
        assert_eq!(err, ApiError::Validation(ValidationError::EmptyQuestionText));
        let err = create(&backend, "Favourite food?", "0").await.unwrap_err();
        assert_eq!(err, ApiError::Validation(ValidationError::InvalidOrderIndex));
        assert!(backend.calls().is_empty());

        let question = create(&backend, "  Favourite food? ", "").await.unwrap();
        assert_eq!(question.text, "Favourite food?");
    }

    #[tokio::test]
    async fn test_list_orders_by_index() {
        let backend = FakeBackend::default();
        create(&backend, "Second", "2").await.unwrap();
        create(&backend, "First", "1").await.unwrap();
        let texts: Vec<_> = list(&backend).await.unwrap().into_iter().map(|q| q.text).collect();
        assert_eq!(texts, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_delete_surfaces_server_message() {
        let backend = FakeBackend::default();
        let question = create(&backend, "Hobby?", "").await.unwrap();
        backend.fail_next(ApiError::Status {
            status: 409,
            message: Some("Question is assigned to a family".into()),
        });
        let err = delete(&backend, question.id).await.unwrap_err();
        assert_eq!(err.user_message(DELETE_FAILED), "Question is assigned to a family");

        delete(&backend, question.id).await.unwrap();
        assert!(list(&backend).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_debug_controls_call_backend() {
        let backend = FakeBackend::default();
        refresh_today(&backend, 7).await.unwrap();
        skip_to_next(&backend, 7).await.unwrap();
        assert_eq!(backend.calls(), vec!["refresh_question", "skip_to_next_question"]);
    }
}
