use chrono::NaiveDateTime;
use diesel::result::Error as DieselError;
use diesel::Queryable;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gamification state for one user. `id` is the user id: one row per
/// user, created lazily before the first points update.
#[derive(Debug, Clone, Serialize, Queryable)]
pub struct UserProfile {
    pub id: i32,
    pub points: i32,
    pub current_streak: i32,
    pub last_study_date: Option<NaiveDateTime>,
    pub weekly_points: i32,
    pub max_streak: i32,
    pub max_weekly_points: i32,
    pub selected_avatar: String,
    pub display_name: Option<String>,
}

/// Profile as returned to the client. `display_streak` is the read-only
/// derivation that hides a streak broken by a missed day; the stored
/// `current_streak` is corrected on the next qualifying action.
#[derive(Serialize)]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub display_streak: i32,
}

#[derive(Debug, Deserialize)]
pub struct AvatarForm {
    pub selected_avatar: String,
}

#[derive(Debug, Deserialize)]
pub struct DisplayNameForm {
    pub display_name: String,
}

/// Errors from the display-name update function. Validation failures are
/// caught before any row is touched.
#[derive(Error, Debug)]
pub enum DisplayNameError {
    #[error("Not logged in")]
    NotLoggedIn,
    #[error("Display name must be 3-20 characters")]
    InvalidLength,
    #[error("Display name contains characters that are not allowed")]
    InvalidCharacters,
    #[error("Display name is not allowed")]
    Blocked,
    #[error("Display name is already taken")]
    Taken,
    #[error("Database error")]
    DatabaseError(#[from] DieselError),
    #[error("Failed to get DB connection")]
    ConnectionError(String),
}

/// One row of the weekly ranking
#[derive(Serialize)]
pub struct RankingEntry {
    pub rank: usize,
    pub user_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub selected_avatar: String,
    pub weekly_points: i32,
}
