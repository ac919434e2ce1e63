use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult,
    models::{Favorite, User},
    services::{favorite_service, user_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/favorite", get(list_user_favorites))
}

/// List all users.
#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "All users, without passwords", body = Vec<User>)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = user_service::list_users(&state.orm).await?;
    Ok(Json(users))
}

/// List every stored favorite.
#[utoipa::path(
    get,
    path = "/user/favorite",
    responses(
        (status = 200, description = "All favorites", body = Vec<Favorite>)
    ),
    tag = "Favorites"
)]
pub async fn list_user_favorites(State(state): State<AppState>) -> AppResult<Json<Vec<Favorite>>> {
    let favorites = favorite_service::list_favorites(&state.orm).await?;
    Ok(Json(favorites))
}
