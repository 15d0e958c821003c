use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    data::models::{ApiResponse, CreateSubjectForm, NewSubject, Subject},
    data::repositories::SubjectRepository,
    utils, DbPool,
};

pub async fn list_subjects(
    State(pool): State<DbPool>,
    session: tower_sessions::Session,
) -> Result<Json<Vec<Subject>>, (StatusCode, String)> {
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

    let subjects = SubjectRepository::list_for_user(&mut conn, user_id).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    Ok(Json(subjects))
}

pub async fn create_subject(
    State(pool): State<DbPool>,
    session: tower_sessions::Session,
    Json(form): Json<CreateSubjectForm>,
) -> Result<Json<Subject>, (StatusCode, String)> {
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

    let subject = SubjectRepository::insert(
        &mut conn,
        &NewSubject {
            user_id,
            name: form.name.trim(),
            color: form.color.as_deref(),
            created_at: Utc::now().naive_utc(),
        },
    )
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    Ok(Json(subject))
}

pub async fn delete_subject(
    State(pool): State<DbPool>,
    session: tower_sessions::Session,
    Path(subject_id): Path<i32>,
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

    let deleted = SubjectRepository::delete_owned(&mut conn, subject_id, user_id).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    if deleted == 0 {
        return Err((StatusCode::NOT_FOUND, "Subject not found".to_string()));
    }

    Ok(Json(ApiResponse::ok("Subject deleted")))
}
