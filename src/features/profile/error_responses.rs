use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::data::models::DisplayNameError;

impl IntoResponse for DisplayNameError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            DisplayNameError::NotLoggedIn => (StatusCode::UNAUTHORIZED, self.to_string()),
            DisplayNameError::InvalidLength
            | DisplayNameError::InvalidCharacters
            | DisplayNameError::Blocked => (StatusCode::BAD_REQUEST, self.to_string()),
            DisplayNameError::Taken => (StatusCode::CONFLICT, self.to_string()),
            DisplayNameError::DatabaseError(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            ),
            DisplayNameError::ConnectionError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e),
        };

        let body = json!({
            "error": message,
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}
