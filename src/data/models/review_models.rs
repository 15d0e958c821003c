use chrono::NaiveDateTime;
use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};

use crate::schema::reviews;

/// Self-reported difficulty of a completed review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Lifecycle state of a review record. Mutated exactly once,
/// pending -> completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Completed,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Completed => "completed",
        }
    }
}

/// A scheduled spaced-repetition review as stored
#[derive(Debug, Clone, Serialize, Queryable)]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub session_id: i32,
    pub subject_id: i32,
    pub review_date: NaiveDateTime, // When the review becomes due
    pub status: String,
    pub review_interval: String, // Ladder token, e.g. "7d"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_review_difficulty: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = reviews)]
pub struct NewReview<'a> {
    pub user_id: i32,
    pub session_id: i32,
    pub subject_id: i32,
    pub review_date: NaiveDateTime,
    pub status: &'a str,
    pub review_interval: &'a str,
}

/// Request payload for completing a review
#[derive(Debug, Deserialize)]
pub struct CompleteReviewForm {
    pub difficulty: Difficulty,
}

/// Response after completing a review. `next_review` is absent when the
/// ladder was exhausted and the cycle ended.
#[derive(Serialize)]
pub struct ReviewCompleted {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review: Option<Review>,
}
