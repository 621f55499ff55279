use serde::{Deserialize, Serialize};

use crate::domain::faq::AnswerOutcome;

/// Body of a `generateContent` call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub tools: Vec<Tool>,
    pub system_instruction: Content,
}

impl GenerateContentRequest {
    /// Single-turn question grounded with Google Search
    pub fn single_turn(question: &str, system_prompt: &str) -> Self {
        Self {
            contents: vec![Content::text(question)],
            tools: vec![Tool::google_search()],
            system_instruction: Content::text(system_prompt),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(text: &str) -> Self {
        Self { parts: vec![Part { text: Some(text.to_string()) }] }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    pub google_search: GoogleSearch,
}

impl Tool {
    pub fn google_search() -> Self {
        Self { google_search: GoogleSearch {} }
    }
}

/// Serializes as `{}`
#[derive(Debug, Clone, Serialize)]
pub struct GoogleSearch {}

/// Reply of a `generateContent` call; every field may be missing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Map the reply onto the domain outcome: first candidate's first
    /// non-empty part text, otherwise the block or finish reason.
    pub fn to_outcome(&self) -> AnswerOutcome {
        let candidate = self.candidates.first();
        let text = candidate
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.first())
            .and_then(|part| part.text.as_deref())
            .filter(|text| !text.is_empty());

        match text {
            Some(text) => AnswerOutcome::Answered(text.to_string()),
            None => AnswerOutcome::unanswered(
                self.prompt_feedback.as_ref().and_then(|f| f.block_reason.as_deref()),
                candidate.and_then(|c| c.finish_reason.as_deref()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_json_snapshot;

    #[test]
    fn request_body_shape() {
        let request = GenerateContentRequest::single_turn("日給はいくら？", "あなたは採用アシスタントです。");
        assert_json_snapshot!(request, @r###"
        {
          "contents": [
            {
              "parts": [
                {
                  "text": "日給はいくら？"
                }
              ]
            }
          ],
          "tools": [
            {
              "google_search": {}
            }
          ],
          "systemInstruction": {
            "parts": [
              {
                "text": "あなたは採用アシスタントです。"
              }
            ]
          }
        }
        "###);
    }

    #[test]
    fn first_candidate_text_is_the_answer() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"もちろん！✨"}],"role":"model"},"finishReason":"STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(response.to_outcome(), AnswerOutcome::Answered("もちろん！✨".to_string()));
    }

    #[test]
    fn blocked_prompt_reports_block_reason() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        assert_eq!(
            response.to_outcome(),
            AnswerOutcome::Unanswered { reason: Some("SAFETY".to_string()) }
        );
    }

    #[test]
    fn empty_candidate_reports_finish_reason() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[]},"finishReason":"MAX_TOKENS"}]}"#,
        )
        .unwrap();
        assert_eq!(
            response.to_outcome(),
            AnswerOutcome::Unanswered { reason: Some("MAX_TOKENS".to_string()) }
        );
    }

    #[test]
    fn empty_block_reason_falls_through_to_finish_reason() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"promptFeedback":{"blockReason":""},"candidates":[{"finishReason":"SAFETY"}]}"#,
        )
        .unwrap();
        assert_eq!(
            response.to_outcome(),
            AnswerOutcome::Unanswered { reason: Some("SAFETY".to_string()) }
        );
    }

    #[test]
    fn empty_reply_has_no_reason() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.to_outcome(), AnswerOutcome::Unanswered { reason: None });
    }
}
