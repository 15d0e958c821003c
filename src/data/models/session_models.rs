use chrono::NaiveDateTime;
use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::study_sessions;

/// A completed study session as stored
#[derive(Debug, Serialize, Queryable)]
pub struct StudySession {
    pub id: i32,
    pub user_id: i32,
    pub subject_id: i32,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_minutes: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions_attempted: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions_correct: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = study_sessions)]
pub struct NewStudySession<'a> {
    pub user_id: i32,
    pub subject_id: i32,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_minutes: i32,
    pub questions_attempted: Option<i32>,
    pub questions_correct: Option<i32>,
    pub notes: Option<&'a str>,
}

/// Request payload for logging a finished study session
#[derive(Debug, Deserialize, Validate)]
pub struct LogSessionForm {
    pub subject_id: i32,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[validate(range(min = 1, max = 1440, message = "Duration must be 1-1440 minutes"))]
    pub duration_minutes: i32,
    pub questions_attempted: Option<i32>,
    pub questions_correct: Option<i32>,
    pub notes: Option<String>,
}

/// Response after a session is saved: the client re-fetches everything
/// else, it only needs the new ids and the first scheduled review.
#[derive(Serialize)]
pub struct SessionSaved {
    pub session_id: i32,
    pub first_review_date: NaiveDateTime,
    pub first_review_interval: String,
}
