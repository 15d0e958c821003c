use chrono::NaiveDateTime;
use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::goals;

/// A study goal, optionally scoped to one subject
#[derive(Debug, Serialize, Queryable)]
pub struct Goal {
    pub id: i32,
    pub user_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<i32>,
    pub title: String,
    pub target_hours: i32,
    pub end_date: NaiveDateTime,
    pub completed: bool,
}

#[derive(Insertable)]
#[diesel(table_name = goals)]
pub struct NewGoal<'a> {
    pub user_id: i32,
    pub subject_id: Option<i32>,
    pub title: &'a str,
    pub target_hours: i32,
    pub end_date: NaiveDateTime,
    pub completed: bool,
}

/// Request payload for creating a goal
#[derive(Debug, Deserialize, Validate)]
pub struct CreateGoalForm {
    pub subject_id: Option<i32>,
    #[validate(length(min = 1, max = 100, message = "Goal title must be 1-100 characters"))]
    pub title: String,
    #[validate(range(min = 1, max = 1000, message = "Target hours must be 1-1000"))]
    pub target_hours: i32,
    pub end_date: NaiveDateTime,
}
