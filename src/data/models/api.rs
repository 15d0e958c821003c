use serde::Serialize;

/// Standard API response format
#[derive(Serialize)]
pub struct ApiResponse {
    pub success: bool,    // Operation status
    pub message: String,  // Result message
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            message: message.into(),
        }
    }
}
