use axum::{extract::Json, http::StatusCode};
use serde::Deserialize;

use crate::{data::models::ApiResponse, utils};

/// The seam where the external auth provider hands us a verified user.
/// Token verification itself lives outside this service; this endpoint
/// only binds the resulting user id to the session.
#[derive(Debug, Deserialize)]
pub struct IdentityForm {
    pub user_id: i32,
}

pub async fn bind_identity(
    session: tower_sessions::Session,
    Json(form): Json<IdentityForm>,
) -> Result<Json<ApiResponse>, (StatusCode, String)> {
    utils::set_user_session(&session, form.user_id)
        .await
        .map_err(|e| {
            log::error!("Failed to set session: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Session error".to_string(),
            )
        })?;

    Ok(Json(ApiResponse::ok("Session established")))
}

pub async fn clear_identity(
    session: tower_sessions::Session,
) -> Result<Json<ApiResponse>, (StatusCode, String)> {
    session.flush().await.map_err(|e| {
        log::error!("Failed to delete session: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Session error".to_string(),
        )
    })?;

    Ok(Json(ApiResponse::ok("Session cleared")))
}
