use futures::future::{FutureExt, LocalBoxFuture};

use super::dto::{GenerateContentRequest, GenerateContentResponse};
use crate::domain::{
    errors::InfrastructureError,
    faq::{AnswerOutcome, GenerativeTextClient, Question},
    logging::{LogComponent, get_logger},
};
use crate::infrastructure::http::{GlooHttpClient, HttpUtils};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";

pub const RECRUITER_SYSTEM_PROMPT: &str = "あなたは株式会社DCの採用アシスタントAIです。軽貨物運送の仕事を探している人の友人として、最高の応援団長になってください！質問には、とても親しみやすく、やる気が出るように絵文字（✨🚚💪など）をたくさん使って、温かく答えてください。株式会社DCの強み（透明性のある報酬制度、風通しの良さ、独立支援など）を盛り込みながら、「君ならできる！」というポジティブな雰囲気で、200文字以内で元気に回答してください！";

/// Endpoint, model and prompt for the FAQ assistant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_base: String,
    pub model: String,
    pub api_key: String,
    pub system_prompt: String,
}

impl Default for GeminiConfig {
    /// The key comes from `GEMINI_API_KEY` at build time; an empty key
    /// makes every call fail with an HTTP error instead of leaking one.
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: option_env!("GEMINI_API_KEY").unwrap_or_default().to_string(),
            system_prompt: RECRUITER_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl GeminiConfig {
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base.trim_end_matches('/'),
            self.model,
            HttpUtils::url_encode(&self.api_key)
        )
    }
}

/// `GenerativeTextClient` backed by the Gemini REST API
#[derive(Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http: GlooHttpClient,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        if config.api_key.is_empty() {
            get_logger().warn(
                LogComponent::Infrastructure("Gemini"),
                "GEMINI_API_KEY was not set at build time; requests will be rejected",
            );
        }
        Self { config, http: GlooHttpClient::new() }
    }

    async fn generate(&self, question: &Question) -> Result<AnswerOutcome, InfrastructureError> {
        let request = GenerateContentRequest::single_turn(question.as_str(), &self.config.system_prompt);
        let response: GenerateContentResponse = self.http.post_json(&self.config.endpoint(), &request).await?;
        let outcome = response.to_outcome();

        if let AnswerOutcome::Unanswered { reason } = &outcome {
            get_logger().warn(
                LogComponent::Infrastructure("Gemini"),
                &format!("No answer text (reason: {})", reason.as_deref().unwrap_or("none")),
            );
        }
        Ok(outcome)
    }
}

impl GenerativeTextClient for GeminiClient {
    fn ask<'a>(&'a self, question: &'a Question) -> LocalBoxFuture<'a, Result<AnswerOutcome, InfrastructureError>> {
        self.generate(question).boxed_local()
    }
}
