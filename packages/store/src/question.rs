//! # Daily question flow
//!
//! [`QuestionView`] holds a loaded [`FamilyQuestion`] plus the local draft state
//! of the answer form, and derives what the viewer may see and do:
//!
//! ```text
//! Unanswered ──submit──▶ Answered ──edit──▶ Editing ──submit/cancel──▶ Answered
//!                            │
//!                            └── all members answered (server) ──▶ Completed
//! ```
//!
//! Submitting and re-submitting are the same upsert on the server; editing only
//! changes which draft the form shows. Answers from other members and the
//! insight are only exposed once the question is completed, even if the payload
//! carries them earlier.

use crate::insight::{normalize_question, Insight};
use crate::models::{Answer, AnswerRequest, FamilyQuestion};
use crate::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerStage {
    Unanswered,
    Answered,
    Editing,
    Completed,
}

/// Reject blank answers before any request is made.
pub fn validate_answer(content: &str) -> Result<AnswerRequest, ValidationError> {
    if content.trim().is_empty() {
        return Err(ValidationError::EmptyAnswer);
    }
    Ok(AnswerRequest {
        content: content.to_string(),
    })
}

/// A loaded question and the viewer's local form state.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    question: FamilyQuestion,
    insight: Option<Insight>,
    editing: bool,
    pub draft: String,
}

impl QuestionView {
    pub fn new(question: FamilyQuestion) -> Self {
        let insight = normalize_question(&question);
        Self {
            question,
            insight,
            editing: false,
            draft: String::new(),
        }
    }

    /// Replace the question with freshly loaded data, leaving edit mode and
    /// re-running insight normalization.
    pub fn reload(&mut self, question: FamilyQuestion) {
        *self = Self::new(question);
    }

    pub fn question(&self) -> &FamilyQuestion {
        &self.question
    }

    pub fn stage(&self) -> AnswerStage {
        if self.question.completed {
            AnswerStage::Completed
        } else if self.question.my_answer.is_none() {
            AnswerStage::Unanswered
        } else if self.editing {
            AnswerStage::Editing
        } else {
            AnswerStage::Answered
        }
    }

    /// Whether the answer form is shown.
    pub fn shows_form(&self) -> bool {
        matches!(self.stage(), AnswerStage::Unanswered | AnswerStage::Editing)
    }

    pub fn can_edit(&self) -> bool {
        self.stage() == AnswerStage::Answered
    }

    /// Enter edit mode with the current answer as draft. Returns false when
    /// editing is not available.
    pub fn start_edit(&mut self) -> bool {
        if !self.can_edit() {
            return false;
        }
        self.draft = self
            .question
            .my_answer
            .as_ref()
            .map(|a| a.content.clone())
            .unwrap_or_default();
        self.editing = true;
        true
    }

    /// Leave edit mode, discarding the draft.
    pub fn cancel_edit(&mut self) {
        self.editing = false;
        self.draft.clear();
    }

    /// Build the submission for the current draft.
    pub fn submission(&self) -> Result<AnswerRequest, ValidationError> {
        validate_answer(&self.draft)
    }

    pub fn my_answer(&self) -> Option<&Answer> {
        self.question.my_answer.as_ref()
    }

    /// Every member's answer, only once completed.
    pub fn visible_answers(&self) -> &[Answer] {
        if self.question.completed {
            &self.question.answers
        } else {
            &[]
        }
    }

    /// The normalized insight, only once completed.
    pub fn visible_insight(&self) -> Option<&Insight> {
        if self.question.completed {
            self.insight.as_ref()
        } else {
            None
        }
    }
}
