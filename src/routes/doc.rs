use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    models::{Character, Favorite, Planet, User},
    response::ErrorResponse,
    routes::{characters, favorites, health, planets, sitemap, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        sitemap::sitemap,
        health::health_check,
        users::list_users,
        users::list_user_favorites,
        characters::list_characters,
        characters::get_character,
        planets::list_planets,
        planets::get_planet,
        favorites::add_character_favorite,
        favorites::remove_character_favorite,
        favorites::add_planet_favorite,
        favorites::remove_planet_favorite
    ),
    components(
        schemas(
            User,
            Character,
            Planet,
            Favorite,
            ErrorResponse,
            health::HealthData,
            sitemap::Sitemap,
            sitemap::Endpoint
        )
    ),
    tags(
        (name = "Sitemap", description = "Endpoint discovery"),
        (name = "Health", description = "Health check endpoint"),
        (name = "Users", description = "User endpoints"),
        (name = "Characters", description = "Character catalog"),
        (name = "Planets", description = "Planet catalog"),
        (name = "Favorites", description = "Favorite endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
