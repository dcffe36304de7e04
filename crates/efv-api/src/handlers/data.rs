//! Placeholder data endpoint.

use axum::Json;

use crate::dto::MessageResponse;

/// Returns a fixed message until a real data source is wired in.
pub async fn mock_data() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Mock data endpoint".into(),
    })
}
