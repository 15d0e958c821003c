use std::sync::Arc;

use axum::extract::{Json, State};

use crate::{
    data::models::{QuizForm, QuizResponse},
    features::quiz::{DailyQuota, QuizClient, QuizError},
    utils,
};

/// Proxies a quiz-generation request to the upstream AI service. The
/// daily quota is taken before the upstream call and resets at the
/// local calendar-day boundary.
pub async fn generate_quiz(
    State((client, quota)): State<(Arc<QuizClient>, Arc<DailyQuota>)>,
    session: tower_sessions::Session,
    Json(form): Json<QuizForm>,
) -> Result<Json<QuizResponse>, QuizError> {
    let user_id = utils::get_current_user_id(&session)
        .await
        .ok_or(QuizError::NotLoggedIn)?;

    let today = chrono::Local::now().date_naive();
    if !quota.try_consume(user_id, today) {
        return Err(QuizError::QuotaExceeded);
    }

    let quiz = client
        .generate(&form.subject, &form.level, form.count)
        .await?;

    Ok(Json(quiz))
}
