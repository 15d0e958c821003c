use serde::{Deserialize, Serialize};

/// Request payload for generating a practice quiz
#[derive(Debug, Deserialize)]
pub struct QuizForm {
    pub subject: String,
    pub level: String,
    pub count: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizItem {
    pub id: String,
    pub prompt: String,
    pub options: Vec<QuizOption>,
    pub correct_answer_index: usize,
}

/// The fixed shape the upstream generator returns
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizResponse {
    pub items: Vec<QuizItem>,
}
