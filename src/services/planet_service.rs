use sea_orm::ConnectionTrait;

use crate::{
    data::PlanetRepository,
    error::{AppError, AppResult},
    models::Planet,
};

pub async fn list_planets<C: ConnectionTrait>(db: &C) -> AppResult<Vec<Planet>> {
    let planets = PlanetRepository::new(db)
        .all()
        .await?
        .into_iter()
        .map(Planet::from)
        .collect();
    Ok(planets)
}

pub async fn get_planet<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Planet> {
    PlanetRepository::new(db)
        .get_by_id(id)
        .await?
        .map(Planet::from)
        .ok_or_else(|| AppError::NotFound("Planet not found".into()))
}
