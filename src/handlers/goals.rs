use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    data::models::{ApiResponse, CreateGoalForm, Goal, NewGoal},
    data::repositories::{GoalRepository, SubjectRepository},
    utils, DbPool,
};

pub async fn list_goals(
    State(pool): State<DbPool>,
    session: tower_sessions::Session,
) -> Result<Json<Vec<Goal>>, (StatusCode, String)> {
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

    let goals = GoalRepository::list_for_user(&mut conn, user_id).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    Ok(Json(goals))
}

pub async fn create_goal(
    State(pool): State<DbPool>,
    session: tower_sessions::Session,
    Json(form): Json<CreateGoalForm>,
) -> Result<Json<Goal>, (StatusCode, String)> {
    let user_id = match utils::get_current_user_id(&session).await {
        Some(id) => id,
        None => return Err((StatusCode::UNAUTHORIZED, "Not logged in".to_string())),
    };

    form.validate()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let mut conn = pool.get().map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    if let Some(subject_id) = form.subject_id {
        SubjectRepository::find_owned(&mut conn, subject_id, user_id)
            .map_err(|e| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", e),
                )
            })?
            .ok_or_else(|| (StatusCode::NOT_FOUND, "Subject not found".to_string()))?;
    }

    let goal = GoalRepository::insert(
        &mut conn,
        &NewGoal {
            user_id,
            subject_id: form.subject_id,
            title: form.title.trim(),
            target_hours: form.target_hours,
            end_date: form.end_date,
            completed: false,
        },
    )
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    Ok(Json(goal))
}

pub async fn complete_goal(
    State(pool): State<DbPool>,
    session: tower_sessions::Session,
    Path(goal_id): Path<i32>,
) -> Result<Json<ApiResponse>, (StatusCode, String)> {
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

    let updated = GoalRepository::mark_completed(&mut conn, goal_id, user_id).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    if updated == 0 {
        return Err((StatusCode::NOT_FOUND, "Goal not found".to_string()));
    }

    Ok(Json(ApiResponse::ok("Goal completed")))
}

pub async fn delete_goal(
    State(pool): State<DbPool>,
    session: tower_sessions::Session,
    Path(goal_id): Path<i32>,
) -> Result<Json<ApiResponse>, (StatusCode, String)> {
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

    let deleted = GoalRepository::delete_owned(&mut conn, goal_id, user_id).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    if deleted == 0 {
        return Err((StatusCode::NOT_FOUND, "Goal not found".to_string()));
    }

    Ok(Json(ApiResponse::ok("Goal deleted")))
}
