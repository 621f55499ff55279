use derive_more::Display;

use crate::domain::errors::{DomainError, DomainResult};

pub const EMPTY_QUESTION_MESSAGE: &str = "質問を入力してくださいね！";
pub const THINKING_MESSAGE: &str = "AIが回答を考えています...";
pub const APOLOGY_MESSAGE: &str = "ごめんなさい！🤖 うまくお答えできませんでした。";
pub const COMMUNICATION_ERROR_MESSAGE: &str =
    "通信エラーが発生したみたいです😢 時間をおいてもう一度試してみてくださいね！APIキーが正しく設定されているかご確認ください。";

/// Finish reason reported for a normal completion
pub const FINISH_REASON_STOP: &str = "STOP";

/// Value Object - trimmed, non-empty visitor question
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct Question(String);

impl Question {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyQuestion);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// What the generative service said, independent of wire format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Answered(String),
    /// No usable text; `reason` explains why when the service said so
    Unanswered { reason: Option<String> },
}

impl AnswerOutcome {
    /// Decide why a response without text was not answered.
    /// A prompt block wins over the candidate's finish reason; `STOP` and
    /// empty strings are not reasons.
    pub fn unanswered(block_reason: Option<&str>, finish_reason: Option<&str>) -> Self {
        let reason = block_reason
            .filter(|r| !r.is_empty())
            .or(finish_reason.filter(|r| !r.is_empty() && *r != FINISH_REASON_STOP))
            .map(str::to_string);
        AnswerOutcome::Unanswered { reason }
    }

    /// Text shown in the answer box
    pub fn display_text(&self) -> String {
        match self {
            AnswerOutcome::Answered(text) => text.clone(),
            AnswerOutcome::Unanswered { reason: Some(reason) } => {
                format!("{}（理由: {}）", APOLOGY_MESSAGE, reason)
            }
            AnswerOutcome::Unanswered { reason: None } => APOLOGY_MESSAGE.to_string(),
        }
    }
}
