use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

pub const FAVORITE_ADDED: &str = "Added Favorite!";
pub const FAVORITE_DELETED: &str = "Favorite deleted.";

/// Successful writes answer with a bare JSON string.
pub fn message(text: impl Into<String>) -> Json<String> {
    Json(text.into())
}
