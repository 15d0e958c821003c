use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::data::models::QuizResponse;

/// Most items the upstream generator is asked for in one call.
pub const MAX_QUIZ_ITEMS: u32 = 20;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Not logged in")]
    NotLoggedIn,
    /// Quota failures are a distinct kind: the client shows the message
    /// verbatim.
    #[error("Daily quiz limit reached, try again tomorrow")]
    QuotaExceeded,
    #[error("Quiz generator request failed")]
    Upstream(#[from] reqwest::Error),
    #[error("Quiz generator returned an unexpected response")]
    BadShape(#[source] serde_json::Error),
}

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            QuizError::NotLoggedIn => (StatusCode::UNAUTHORIZED, self.to_string()),
            QuizError::QuotaExceeded => (StatusCode::TOO_MANY_REQUESTS, self.to_string()),
            QuizError::Upstream(e) => {
                log::error!("Quiz upstream error: {}", e);
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
            QuizError::BadShape(e) => {
                log::error!("Quiz upstream returned malformed body: {}", e);
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
        };

        let body = json!({
            "error": message,
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Thin client for the AI quiz generator. The generator itself is an
/// opaque collaborator returning a fixed JSON shape.
pub struct QuizClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl QuizClient {
    pub fn new(endpoint: String, api_key: String) -> Self {
        QuizClient {
            http: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }

    pub async fn generate(
        &self,
        subject: &str,
        level: &str,
        count: u32,
    ) -> Result<QuizResponse, QuizError> {
        let count = count.clamp(1, MAX_QUIZ_ITEMS);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "subject": subject,
                "level": level,
                "count": count,
            }))
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(QuizError::BadShape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_shape_decodes() {
        let body = r#"{
            "items": [{
                "id": "q1",
                "prompt": "What is 2+2?",
                "options": [
                    {"id": "a", "text": "3"},
                    {"id": "b", "text": "4"}
                ],
                "correctAnswerIndex": 1
            }]
        }"#;

        let quiz: QuizResponse = serde_json::from_str(body).unwrap();
        assert_eq!(quiz.items.len(), 1);
        assert_eq!(quiz.items[0].correct_answer_index, 1);
        assert_eq!(quiz.items[0].options[1].text, "4");
    }

    #[test]
    fn missing_fields_are_a_shape_error() {
        let body = r#"{"items": [{"id": "q1"}]}"#;
        assert!(serde_json::from_str::<QuizResponse>(body).is_err());
    }
}
