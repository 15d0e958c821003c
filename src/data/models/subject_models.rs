use chrono::NaiveDateTime;
use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::subjects;

/// A subject the user tracks study time against
#[derive(Debug, Serialize, Queryable)]
pub struct Subject {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>, // Hex color used by the client
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = subjects)]
pub struct NewSubject<'a> {
    pub user_id: i32,
    pub name: &'a str,
    pub color: Option<&'a str>,
    pub created_at: NaiveDateTime,
}

/// Request payload for creating a subject
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubjectForm {
    #[validate(length(min = 1, max = 60, message = "Subject name must be 1-60 characters"))]
    pub name: String,
    pub color: Option<String>,
}
