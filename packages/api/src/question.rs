//! Daily question flows.

use store::question::validate_answer;
use store::{FamilyQuestion, QuestionHistoryItem};

use crate::backend::{ApiResult, Backend};

pub const SUBMIT_FAILED: &str = "Could not save your answer. Please try again.";
pub const LOAD_FAILED: &str = "Could not load the question.";
pub const HISTORY_FAILED: &str = "Could not load question history.";

/// Today's question. HTTP 400 means none is assigned today and maps to `None`.
pub async fn today<B: Backend>(backend: &B) -> ApiResult<Option<FamilyQuestion>> {
    match backend.today_question().await {
        Ok(question) => Ok(Some(question)),
        Err(e) if e.is_bad_request() => {
            tracing::debug!("No question today: {}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

pub async fn detail<B: Backend>(backend: &B, family_question_id: i64) -> ApiResult<FamilyQuestion> {
    backend.question_detail(family_question_id).await
}

pub async fn history<B: Backend>(backend: &B) -> ApiResult<Vec<QuestionHistoryItem>> {
    backend.question_history().await
}

/// Submit or re-submit the viewer's answer, then reload the question.
/// Content that is blank after trimming is rejected without a request.
pub async fn submit<B: Backend>(
    backend: &B,
    family_question_id: i64,
    content: &str,
) -> ApiResult<FamilyQuestion> {
    let request = validate_answer(content)?;
    backend.submit_answer(family_question_id, &request).await?;
    tracing::info!("Answer saved for question {}", family_question_id);
    backend.question_detail(family_question_id).await
}
