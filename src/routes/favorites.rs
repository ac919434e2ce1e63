use axum::{Json, Router, extract::State, routing::post};

use crate::{
    error::AppResult,
    middleware::actor::Actor,
    response::{ErrorResponse, FAVORITE_ADDED, FAVORITE_DELETED, message},
    routes::params::IdPath,
    services::favorite_service::{self, FavoriteTarget},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/character/{id}",
            post(add_character_favorite).delete(remove_character_favorite),
        )
        .route(
            "/planet/{id}",
            post(add_planet_favorite).delete(remove_planet_favorite),
        )
}

/// Add a character to the actor's favorites.
#[utoipa::path(
    post,
    path = "/favorite/character/{id}",
    params(
        ("id" = i32, Path, description = "Character ID"),
        ("X-User-Id" = Option<i32>, Header, description = "Acting user, defaults to DEFAULT_USER_ID")
    ),
    responses(
        (status = 200, description = "Added Favorite!", body = String),
        (status = 400, description = "Favorite was already added", body = ErrorResponse),
        (status = 404, description = "Character not found", body = ErrorResponse)
    ),
    tag = "Favorites"
)]
pub async fn add_character_favorite(
    IdPath(id): IdPath,
    actor: Actor,
    State(state): State<AppState>,
) -> AppResult<Json<String>> {
    favorite_service::add_favorite(&state.orm, &actor, FavoriteTarget::Character(id)).await?;
    Ok(message(FAVORITE_ADDED))
}

/// Add a planet to the actor's favorites.
#[utoipa::path(
    post,
    path = "/favorite/planet/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID"),
        ("X-User-Id" = Option<i32>, Header, description = "Acting user, defaults to DEFAULT_USER_ID")
    ),
    responses(
        (status = 200, description = "Added Favorite!", body = String),
        (status = 400, description = "Favorite was already added", body = ErrorResponse),
        (status = 404, description = "Planet not found", body = ErrorResponse)
    ),
    tag = "Favorites"
)]
pub async fn add_planet_favorite(
    IdPath(id): IdPath,
    actor: Actor,
    State(state): State<AppState>,
) -> AppResult<Json<String>> {
    favorite_service::add_favorite(&state.orm, &actor, FavoriteTarget::Planet(id)).await?;
    Ok(message(FAVORITE_ADDED))
}

#[utoipa::path(
    delete,
    path = "/favorite/character/{id}",
    params(
        ("id" = i32, Path, description = "Character ID"),
        ("X-User-Id" = Option<i32>, Header, description = "Acting user, defaults to DEFAULT_USER_ID")
    ),
    responses(
        (status = 200, description = "Favorite deleted.", body = String),
        (status = 400, description = "Invalid character ID", body = ErrorResponse)
    ),
    tag = "Favorites"
)]
pub async fn remove_character_favorite(
    IdPath(id): IdPath,
    actor: Actor,
    State(state): State<AppState>,
) -> AppResult<Json<String>> {
    favorite_service::remove_favorite(&state.orm, &actor, FavoriteTarget::Character(id)).await?;
    Ok(message(FAVORITE_DELETED))
}

#[utoipa::path(
    delete,
    path = "/favorite/planet/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID"),
        ("X-User-Id" = Option<i32>, Header, description = "Acting user, defaults to DEFAULT_USER_ID")
    ),
    responses(
        (status = 200, description = "Favorite deleted.", body = String),
        (status = 400, description = "Invalid planet ID", body = ErrorResponse)
    ),
    tag = "Favorites"
)]
pub async fn remove_planet_favorite(
    IdPath(id): IdPath,
    actor: Actor,
    State(state): State<AppState>,
) -> AppResult<Json<String>> {
    favorite_service::remove_favorite(&state.orm, &actor, FavoriteTarget::Planet(id)).await?;
    Ok(message(FAVORITE_DELETED))
}
