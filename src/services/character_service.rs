use sea_orm::ConnectionTrait;

use crate::{
    data::CharacterRepository,
    error::{AppError, AppResult},
    models::Character,
};

pub async fn list_characters<C: ConnectionTrait>(db: &C) -> AppResult<Vec<Character>> {
    let characters = CharacterRepository::new(db)
        .all()
        .await?
        .into_iter()
        .map(Character::from)
        .collect();
    Ok(characters)
}

pub async fn get_character<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Character> {
    CharacterRepository::new(db)
        .get_by_id(id)
        .await?
        .map(Character::from)
        .ok_or_else(|| AppError::NotFound("Character not found".into()))
}
