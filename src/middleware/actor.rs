use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{error::AppError, state::AppState};

pub const USER_ID_HEADER: &str = "x-user-id";

/// The user a write is attributed to.
///
/// Taken from the `X-User-Id` header, falling back to the configured default
/// user. There is no authentication; the id is trusted as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: i32,
}

impl Actor {
    pub fn new(user_id: i32) -> Self {
        Self { user_id }
    }

    fn from_parts(parts: &Parts, default_user_id: Option<i32>) -> Result<Self, AppError> {
        let Some(header) = parts.headers.get(USER_ID_HEADER) else {
            return default_user_id
                .map(Actor::new)
                .ok_or_else(|| AppError::BadRequest("Missing actor id".into()));
        };

        let user_id = header
            .to_str()
            .ok()
            .and_then(|raw| raw.trim().parse::<i32>().ok())
            .ok_or_else(|| AppError::BadRequest("Invalid X-User-Id header".into()))?;

        Ok(Actor::new(user_id))
    }
}

impl FromRequestParts<AppState> for Actor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Actor::from_parts(parts, state.default_user_id)
    }
}
