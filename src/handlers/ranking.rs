use axum::{extract::State, http::StatusCode, Json};

use crate::{
    data::models::RankingEntry,
    data::repositories::{FriendshipRepository, ProfileRepository},
    features::gamification::GamificationEngine,
    utils, DbPool,
};

/// Weekly ranking: the current user plus accepted friends, ordered by
/// weekly points. The weekly-points record check runs here for the
/// current user, so the record is only as fresh as the last view.
pub async fn weekly_ranking(
    State(pool): State<DbPool>,
    session: tower_sessions::Session,
) -> Result<Json<Vec<RankingEntry>>, (StatusCode, String)> {
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
    GamificationEngine::check_and_update_weekly_points_record(&mut conn, user_id).map_err(|e| {
        log::error!("Weekly record check failed for user {}: {}", user_id, e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to update weekly record".to_string(),
        )
    })?;

    let mut ids = FriendshipRepository::accepted_friend_ids(&mut conn, user_id).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;
    ids.push(user_id);

    let ranking = ProfileRepository::weekly_ranking(&mut conn, ids)
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .into_iter()
        .enumerate()
        .map(|(i, p)| RankingEntry {
            rank: i + 1,
            user_id: p.id,
            display_name: p.display_name,
            selected_avatar: p.selected_avatar,
            weekly_points: p.weekly_points,
        })
        .collect();

    Ok(Json(ranking))
}
