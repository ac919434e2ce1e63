use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use starwars_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{Characters, Planets, Users, character, planet, user},
    services::user_service::hash_password,
};

struct CharacterSeed {
    name: &'static str,
    birth_year: f64,
    species: &'static str,
    height: i32,
    mass: i32,
    gender: &'static str,
    hair_color: &'static str,
    skin_color: &'static str,
    eye_color: &'static str,
    homeworld: &'static str,
}

struct PlanetSeed {
    name: &'static str,
    population: i64,
    rotation_period: i32,
    orbital_period: i32,
    diameter: i32,
    gravity: &'static str,
    terrain: &'static str,
    surface_water: i32,
    climate: &'static str,
}

const CHARACTERS: &[CharacterSeed] = &[
    CharacterSeed {
        name: "Luke Skywalker",
        birth_year: 19.0,
        species: "Human",
        height: 172,
        mass: 77,
        gender: "male",
        hair_color: "blond",
        skin_color: "fair",
        eye_color: "blue",
        homeworld: "Tatooine",
    },
    CharacterSeed {
        name: "Leia Organa",
        birth_year: 19.0,
        species: "Human",
        height: 150,
        mass: 49,
        gender: "female",
        hair_color: "brown",
        skin_color: "light",
        eye_color: "brown",
        homeworld: "Alderaan",
    },
    CharacterSeed {
        name: "Yoda",
        birth_year: 896.0,
        species: "Yoda's species",
        height: 66,
        mass: 17,
        gender: "male",
        hair_color: "white",
        skin_color: "green",
        eye_color: "brown",
        homeworld: "unknown",
    },
];

const PLANETS: &[PlanetSeed] = &[
    PlanetSeed {
        name: "Tatooine",
        population: 200_000,
        rotation_period: 23,
        orbital_period: 304,
        diameter: 10465,
        gravity: "1 standard",
        terrain: "desert",
        surface_water: 1,
        climate: "arid",
    },
    PlanetSeed {
        name: "Alderaan",
        population: 2_000_000_000,
        rotation_period: 24,
        orbital_period: 364,
        diameter: 12500,
        gravity: "1 standard",
        terrain: "grasslands, mountains",
        surface_water: 40,
        climate: "temperate",
    },
    PlanetSeed {
        name: "Hoth",
        population: 0,
        rotation_period: 23,
        orbital_period: 549,
        diameter: 7200,
        gravity: "1.1 standard",
        terrain: "tundra, ice caves, mountain ranges",
        surface_water: 100,
        climate: "frozen",
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;

    let user_id = ensure_user(&orm, "luke", "luke@rebellion.org", "usetheforce").await?;
    seed_characters(&orm).await?;
    seed_planets(&orm).await?;

    println!("Seed completed. User ID: {user_id}");
    Ok(())
}

async fn ensure_user(
    orm: &DatabaseConnection,
    username: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<i32> {
    if let Some(existing) = Users::find()
        .filter(user::Column::Email.eq(email))
        .one(orm)
        .await?
    {
        println!("User {email} already present");
        return Ok(existing.id);
    }

    let password_hash = hash_password(password)?;

    let created = user::ActiveModel {
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        password: Set(password_hash),
        is_active: Set(true),
        ..Default::default()
    }
    .insert(orm)
    .await?;

    println!("Created user {email}");
    Ok(created.id)
}

async fn seed_characters(orm: &DatabaseConnection) -> anyhow::Result<()> {
    for seed in CHARACTERS {
        let exists = Characters::find()
            .filter(character::Column::Name.eq(seed.name))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }

        character::ActiveModel {
            name: Set(Some(seed.name.to_string())),
            birth_year: Set(Some(seed.birth_year)),
            species: Set(Some(seed.species.to_string())),
            height: Set(Some(seed.height)),
            mass: Set(Some(seed.mass)),
            gender: Set(Some(seed.gender.to_string())),
            hair_color: Set(Some(seed.hair_color.to_string())),
            skin_color: Set(Some(seed.skin_color.to_string())),
            eye_color: Set(Some(seed.eye_color.to_string())),
            homeworld: Set(Some(seed.homeworld.to_string())),
            ..Default::default()
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded characters");
    Ok(())
}

async fn seed_planets(orm: &DatabaseConnection) -> anyhow::Result<()> {
    for seed in PLANETS {
        let exists = Planets::find()
            .filter(planet::Column::Name.eq(seed.name))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }

        planet::ActiveModel {
            name: Set(Some(seed.name.to_string())),
            population: Set(Some(seed.population)),
            rotation_period: Set(Some(seed.rotation_period)),
            orbital_period: Set(Some(seed.orbital_period)),
            diameter: Set(Some(seed.diameter)),
            gravity: Set(Some(seed.gravity.to_string())),
            terrain: Set(Some(seed.terrain.to_string())),
            surface_water: Set(Some(seed.surface_water)),
            climate: Set(Some(seed.climate.to_string())),
            ..Default::default()
        }
        .insert(orm)
        .await?;
    }

    println!("Seeded planets");
    Ok(())
}
