//! Transport records returned by the API.
//!
//! Each record mirrors its table column for column. `User` deliberately has
//! no password field, so it can never be serialized.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{character, favorite, planet, user};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Character {
    pub id: i32,
    pub name: Option<String>,
    pub img_url: Option<String>,
    pub description: Option<String>,
    pub birth_year: Option<f64>,
    pub species: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub homeworld: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Planet {
    pub id: i32,
    pub name: Option<String>,
    pub img_url: Option<String>,
    pub description: Option<String>,
    pub population: Option<i64>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub diameter: Option<i32>,
    pub terrain: Option<String>,
    pub climate: Option<String>,
    pub surface_water: Option<i32>,
    pub gravity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Favorite {
    pub id: i32,
    pub user_id: Option<i32>,
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
}

impl From<user::Model> for User {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            username: model.username,
            is_active: model.is_active,
        }
    }
}

impl From<character::Model> for Character {
    fn from(model: character::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            img_url: model.img_url,
            description: model.description,
            birth_year: model.birth_year,
            species: model.species,
            height: model.height,
            mass: model.mass,
            gender: model.gender,
            hair_color: model.hair_color,
            skin_color: model.skin_color,
            eye_color: model.eye_color,
            homeworld: model.homeworld,
        }
    }
}

impl From<planet::Model> for Planet {
    fn from(model: planet::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            img_url: model.img_url,
            description: model.description,
            population: model.population,
            rotation_period: model.rotation_period,
            orbital_period: model.orbital_period,
            diameter: model.diameter,
            terrain: model.terrain,
            climate: model.climate,
            surface_water: model.surface_water,
            gravity: model.gravity,
        }
    }
}

impl From<favorite::Model> for Favorite {
    fn from(model: favorite::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            character_id: model.character_id,
            planet_id: model.planet_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serialization_omits_password() {
        let model = user::Model {
            id: 2,
            username: "luke".into(),
            email: "luke@tatooine.org".into(),
            password: "usetheforce".into(),
            is_active: true,
        };

        let value = serde_json::to_value(User::from(model)).unwrap();

        assert!(value.get("password").is_none());
        assert_eq!(value["username"], "luke");
        assert_eq!(value["email"], "luke@tatooine.org");
        assert_eq!(value["is_active"], true);
    }

    #[test]
    fn favorite_exposes_raw_foreign_keys() {
        let model = favorite::Model {
            id: 1,
            user_id: Some(2),
            character_id: None,
            planet_id: Some(7),
        };

        let value = serde_json::to_value(Favorite::from(model)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "id": 1, "user_id": 2, "character_id": null, "planet_id": 7 })
        );
    }
}
