use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult,
    models::Character,
    response::ErrorResponse,
    routes::params::IdPath,
    services::character_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_characters))
        .route("/{id}", get(get_character))
}

/// List all characters.
#[utoipa::path(
    get,
    path = "/character",
    responses(
        (status = 200, description = "All characters", body = Vec<Character>)
    ),
    tag = "Characters"
)]
pub async fn list_characters(State(state): State<AppState>) -> AppResult<Json<Vec<Character>>> {
    let characters = character_service::list_characters(&state.orm).await?;
    Ok(Json(characters))
}

/// Get one character.
#[utoipa::path(
    get,
    path = "/character/{id}",
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Character", body = Character),
        (status = 404, description = "Character not found", body = ErrorResponse)
    ),
    tag = "Characters"
)]
pub async fn get_character(
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> AppResult<Json<Character>> {
    let character = character_service::get_character(&state.orm, id).await?;
    Ok(Json(character))
}
