use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult,
    models::Planet,
    response::ErrorResponse,
    routes::params::IdPath,
    services::planet_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_planets))
        .route("/{id}", get(get_planet))
}

/// List all planets.
#[utoipa::path(
    get,
    path = "/planet",
    responses(
        (status = 200, description = "All planets", body = Vec<Planet>)
    ),
    tag = "Planets"
)]
pub async fn list_planets(State(state): State<AppState>) -> AppResult<Json<Vec<Planet>>> {
    let planets = planet_service::list_planets(&state.orm).await?;
    Ok(Json(planets))
}

/// Get one planet.
#[utoipa::path(
    get,
    path = "/planet/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Planet", body = Planet),
        (status = 404, description = "Planet not found", body = ErrorResponse)
    ),
    tag = "Planets"
)]
pub async fn get_planet(
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> AppResult<Json<Planet>> {
    let planet = planet_service::get_planet(&state.orm, id).await?;
    Ok(Json(planet))
}
