pub mod auth_handler;
pub mod content_handler;
pub mod like_handler;
pub mod page_handler;

use axum::response::IntoResponse;
use chrono::Utc;
use crate::utils::view_response::ViewBuilder;

pub async fn health_check_handler() -> impl IntoResponse {
    ViewBuilder::render(
        "health",
        serde_json::json!({
            "status": "up",
            "server_time": Utc::now().to_rfc3339(),
        }),
    )
}
