use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use chrono::Utc;

use crate::{
    data::models::{CompleteReviewForm, Review, ReviewCompleted, ReviewStatus},
    data::repositories::{ProfileRepository, ReviewRepository},
    features::gamification::GamificationEngine,
    features::srs::{SchedulerError, SrsEngine},
    utils, DbPool,
};

pub async fn due_reviews(
    State(pool): State<DbPool>,
    session: tower_sessions::Session,
) -> Result<Json<Vec<Review>>, (StatusCode, String)> {
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

    let due = ReviewRepository::due_for_user(&mut conn, user_id, Utc::now().naive_utc()).map_err(
        |e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        },
    )?;

    Ok(Json(due))
}

/// Completes a pending review and runs the follow-up writes: schedule
/// the next review from the reported difficulty, then apply the
/// gamification update. The completed mark is not rolled back when a
/// follow-up fails; the client re-fetches the review list.
pub async fn complete_review(
    State(pool): State<DbPool>,
    session: tower_sessions::Session,
    Path(review_id): Path<i32>,
    Json(form): Json<CompleteReviewForm>,
) -> Result<Json<ReviewCompleted>, (StatusCode, String)> {
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

    let review = ReviewRepository::find_owned(&mut conn, review_id, user_id)
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Review not found".to_string()))?;

    if review.status != ReviewStatus::Pending.as_str() {
        return Err((
            StatusCode::CONFLICT,
            "Review already completed".to_string(),
        ));
    }

    ReviewRepository::mark_completed(&mut conn, review_id, form.difficulty).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    let now = Utc::now().naive_utc();

    let next_review = SrsEngine::new(&mut conn)
        .schedule_next(&review, form.difficulty, now)
        .map_err(|e| match e {
            SchedulerError::UnknownInterval(token) => {
                log::error!(
                    "Review {} carries an interval off the ladder: {}",
                    review_id,
                    token
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
            SchedulerError::DatabaseError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", err),
            ),
        })?;

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

    Ok(Json(ReviewCompleted {
        success: true,
        next_review,
    }))
}
