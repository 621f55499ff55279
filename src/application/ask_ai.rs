use crate::domain::{
    faq::{COMMUNICATION_ERROR_MESSAGE, EMPTY_QUESTION_MESSAGE, GenerativeTextClient, Question, THINKING_MESSAGE},
    logging::{LogComponent, get_logger},
};

/// What the answer box and ask button currently show
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AskAiState {
    /// Answer box hidden, nothing asked yet
    #[default]
    Idle,
    /// Button pressed with a blank question
    MissingQuestion,
    /// Request in flight; the button stays disabled
    Thinking,
    /// Model text, or the apology when the model gave none
    Answered(String),
    /// Transport or HTTP failure
    Failed,
}

impl AskAiState {
    pub fn is_busy(&self) -> bool {
        matches!(self, AskAiState::Thinking)
    }

    pub fn answer_box_visible(&self) -> bool {
        !matches!(self, AskAiState::Idle)
    }

    pub fn message(&self) -> Option<String> {
        match self {
            AskAiState::Idle => None,
            AskAiState::MissingQuestion => Some(EMPTY_QUESTION_MESSAGE.to_string()),
            AskAiState::Thinking => Some(THINKING_MESSAGE.to_string()),
            AskAiState::Answered(text) => Some(text.clone()),
            AskAiState::Failed => Some(COMMUNICATION_ERROR_MESSAGE.to_string()),
        }
    }
}

/// Use case behind the FAQ widget's ask button
pub struct AskAiUseCase<C: GenerativeTextClient> {
    client: C,
}

impl<C: GenerativeTextClient> AskAiUseCase<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Validate the raw input; a blank question maps straight to its state
    pub fn prepare(&self, raw: &str) -> Result<Question, AskAiState> {
        Question::parse(raw).map_err(|_| AskAiState::MissingQuestion)
    }

    /// Ask the model and turn the outcome into the final widget state
    pub async fn answer(&self, question: &Question) -> AskAiState {
        get_logger().info(
            LogComponent::Application("AskAi"),
            &format!("Asking model ({} chars)", question.as_str().chars().count()),
        );

        match self.client.ask(question).await {
            Ok(outcome) => AskAiState::Answered(outcome.display_text()),
            Err(e) => {
                get_logger().error(
                    LogComponent::Application("AskAi"),
                    &format!("Generative API call failed: {}", e),
                );
                AskAiState::Failed
            }
        }
    }
}
