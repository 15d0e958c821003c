use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use chrono::Utc;

use crate::{
    data::models::{
        ApiResponse, FriendEntry, FriendRequestForm, Friendship, RespondForm,
    },
    data::repositories::{FriendshipRepository, ProfileRepository},
    utils, DbPool,
};

pub async fn send_request(
    State(pool): State<DbPool>,
    session: tower_sessions::Session,
    Json(form): Json<FriendRequestForm>,
) -> Result<Json<Friendship>, (StatusCode, String)> {
    let user_id = match utils::get_current_user_id(&session).await {
        Some(id) => id,
        None => return Err((StatusCode::UNAUTHORIZED, "Not logged in".to_string())),
    };

    if form.user_id == user_id {
        return Err((
            StatusCode::BAD_REQUEST,
            "Cannot send a friend request to yourself".to_string(),
        ));
    }

    let mut conn = pool.get().map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    let existing = FriendshipRepository::between(&mut conn, user_id, form.user_id).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;
    if existing.is_some() {
        return Err((
            StatusCode::CONFLICT,
            "A friendship with this user already exists".to_string(),
        ));
    }

    let friendship =
        FriendshipRepository::create_request(&mut conn, user_id, form.user_id, Utc::now().naive_utc())
            .map_err(|e| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", e),
                )
            })?;

    Ok(Json(friendship))
}

pub async fn respond_request(
    State(pool): State<DbPool>,
    session: tower_sessions::Session,
    Path(request_id): Path<i32>,
    Json(form): Json<RespondForm>,
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

    let request = FriendshipRepository::find_pending_for(&mut conn, request_id, user_id)
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Friend request not found".to_string()))?;

    FriendshipRepository::set_status(
        &mut conn,
        request.id,
        form.action.resulting_status(),
        user_id,
        Utc::now().naive_utc(),
    )
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    Ok(Json(ApiResponse::ok("Friend request updated")))
}

pub async fn list_friends(
    State(pool): State<DbPool>,
    session: tower_sessions::Session,
) -> Result<Json<Vec<FriendEntry>>, (StatusCode, String)> {
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

    let friend_ids = FriendshipRepository::accepted_friend_ids(&mut conn, user_id).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    let friends = ProfileRepository::for_users(&mut conn, friend_ids)
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .into_iter()
        .map(|p| FriendEntry {
            user_id: p.id,
            display_name: p.display_name,
            selected_avatar: p.selected_avatar,
            points: p.points,
            current_streak: p.current_streak,
        })
        .collect();

    Ok(Json(friends))
}

pub async fn pending_requests(
    State(pool): State<DbPool>,
    session: tower_sessions::Session,
) -> Result<Json<Vec<Friendship>>, (StatusCode, String)> {
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

    let pending = FriendshipRepository::pending_for_user(&mut conn, user_id).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    Ok(Json(pending))
}
