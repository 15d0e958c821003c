use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    data::models::{LogSessionForm, NewStudySession, SessionSaved, StudySession},
    data::repositories::{ProfileRepository, SessionRepository, SubjectRepository},
    features::gamification::GamificationEngine,
    features::srs::SrsEngine,
    utils, DbPool,
};

/// Logs a finished study session, then runs the two follow-up writes:
/// the gamification update and the first scheduled review. The three
/// writes are independent; a failed follow-up leaves the session saved
/// and the client re-fetches authoritative state.
pub async fn log_session(
    State(pool): State<DbPool>,
    session: tower_sessions::Session,
    Json(form): Json<LogSessionForm>,
) -> Result<Json<SessionSaved>, (StatusCode, String)> {
    let user_id = match utils::get_current_user_id(&session).await {
        Some(id) => id,
        None => return Err((StatusCode::UNAUTHORIZED, "Not logged in".to_string())),
    };

    form.validate()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    if form.end_time <= form.start_time {
        return Err((
            StatusCode::BAD_REQUEST,
            "End time must be after start time".to_string(),
        ));
    }
    if let (Some(attempted), Some(correct)) = (form.questions_attempted, form.questions_correct) {
        if attempted < 0 || correct < 0 || correct > attempted {
            return Err((
                StatusCode::BAD_REQUEST,
                "Question counts are inconsistent".to_string(),
            ));
        }
    }

    let mut conn = pool.get().map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    SubjectRepository::find_owned(&mut conn, form.subject_id, user_id)
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Subject not found".to_string()))?;

    let session_id = SessionRepository::insert(
        &mut conn,
        &NewStudySession {
            user_id,
            subject_id: form.subject_id,
            start_time: form.start_time,
            end_time: form.end_time,
            duration_minutes: form.duration_minutes,
            questions_attempted: form.questions_attempted,
            questions_correct: form.questions_correct,
            notes: form.notes.as_deref(),
        },
    )
    .map_err(|e| {
        log::error!("Failed to save study session: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    let now = Utc::now().naive_utc();

    ProfileRepository::ensure_exists(&mut conn, user_id).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;
    GamificationEngine::apply_study_completion(&mut conn, user_id, now).map_err(|e| {
        log::error!("Gamification update failed for user {}: {}", user_id, e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to update points".to_string(),
        )
    })?;

    let first_review = SrsEngine::new(&mut conn)
        .schedule_first(user_id, session_id, form.subject_id, now)
        .map_err(|e| {
            log::error!("Failed to schedule first review: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to schedule review".to_string(),
            )
        })?;

    Ok(Json(SessionSaved {
        session_id,
        first_review_date: first_review.review_date,
        first_review_interval: first_review.review_interval,
    }))
}

pub async fn list_sessions(
    State(pool): State<DbPool>,
    session: tower_sessions::Session,
) -> Result<Json<Vec<StudySession>>, (StatusCode, String)> {
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

    let sessions = SessionRepository::recent_for_user(&mut conn, user_id, 50).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    Ok(Json(sessions))
}
