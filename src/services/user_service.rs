use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use sea_orm::ConnectionTrait;

use crate::{
    data::UserRepository,
    error::{AppError, AppResult},
    models::User,
};

pub async fn list_users<C: ConnectionTrait>(db: &C) -> AppResult<Vec<User>> {
    let users = UserRepository::new(db)
        .all()
        .await?
        .into_iter()
        .map(User::from)
        .collect();
    Ok(users)
}

/// Argon2 PHC string for storing in `user.password`.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::user::PASSWORD_MAX_LEN;

    #[test]
    fn password_hash_fits_column() -> anyhow::Result<()> {
        let hash = hash_password("usetheforce")?;

        assert!(hash.starts_with("$argon2"));
        assert!(
            hash.len() <= PASSWORD_MAX_LEN as usize,
            "hash is {} chars, column holds {PASSWORD_MAX_LEN}",
            hash.len()
        );
        Ok(())
    }

    #[test]
    fn password_hash_is_salted() -> anyhow::Result<()> {
        assert_ne!(hash_password("usetheforce")?, hash_password("usetheforce")?);
        Ok(())
    }
}
