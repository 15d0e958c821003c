use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use chrono::Utc;

use crate::{
    data::models::{ApiResponse, AvatarForm, DisplayNameError, DisplayNameForm, ProfileView},
    data::repositories::ProfileRepository,
    features::gamification::display_streak,
    features::profile::validation,
    utils, DbPool,
};

/// Avatars the client can pick from.
pub const AVATARS: [&str; 6] = ["owl", "fox", "cat", "panda", "tiger", "koala"];

pub async fn get_profile(
    State(pool): State<DbPool>,
    session: tower_sessions::Session,
) -> Result<Json<ProfileView>, (StatusCode, String)> {
    let user_id = match utils::get_current_user_id(&session).await {
        Some(id) => id,
        None => return Err((StatusCode::UNAUTHORIZED, "Not logged in".to_string())),
    };

    let mut conn = pool.get().map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    ProfileRepository::ensure_exists(&mut conn, user_id).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    let profile = ProfileRepository::find(&mut conn, user_id)
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Profile missing after creation".to_string(),
            )
        })?;

    let today = Utc::now().date_naive();
    let display_streak = display_streak(profile.last_study_date, profile.current_streak, today);

    Ok(Json(ProfileView {
        profile,
        display_streak,
    }))
}

pub async fn update_avatar(
    State(pool): State<DbPool>,
    session: tower_sessions::Session,
    Json(form): Json<AvatarForm>,
) -> Result<Json<ApiResponse>, (StatusCode, String)> {
    let user_id = match utils::get_current_user_id(&session).await {
        Some(id) => id,
        None => return Err((StatusCode::UNAUTHORIZED, "Not logged in".to_string())),
    };

    if !AVATARS.contains(&form.selected_avatar.as_str()) {
        return Err((StatusCode::BAD_REQUEST, "Unknown avatar".to_string()));
    }

    let mut conn = pool.get().map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    ProfileRepository::ensure_exists(&mut conn, user_id).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;
    ProfileRepository::update_avatar(&mut conn, user_id, &form.selected_avatar).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    Ok(Json(ApiResponse::ok("Avatar updated")))
}

/// The display-name update function: validation runs before any row is
/// touched, and the server repeats the client's checks and adds the
/// uniqueness check.
pub async fn update_display_name(
    State(pool): State<DbPool>,
    session: tower_sessions::Session,
    Json(form): Json<DisplayNameForm>,
) -> Result<Json<ProfileView>, DisplayNameError> {
    let user_id = utils::get_current_user_id(&session)
        .await
        .ok_or(DisplayNameError::NotLoggedIn)?;

    validation::check_display_name(&form.display_name)?;
    let name = form.display_name.trim();

    let mut conn = pool.get().map_err(|e| {
        log::error!("Failed to get DB connection: {}", e);
        DisplayNameError::ConnectionError("Failed to get DB connection".to_string())
    })?;

    ProfileRepository::ensure_exists(&mut conn, user_id)?;

    if ProfileRepository::display_name_taken(&mut conn, name, user_id)? {
        return Err(DisplayNameError::Taken);
    }

    ProfileRepository::update_display_name(&mut conn, user_id, name)?;

    let profile = ProfileRepository::find(&mut conn, user_id)?.ok_or_else(|| {
        DisplayNameError::ConnectionError("Profile missing after update".to_string())
    })?;

    let today = Utc::now().date_naive();
    let display_streak = display_streak(profile.last_study_date, profile.current_streak, today);

    Ok(Json(ProfileView {
        profile,
        display_streak,
    }))
}
