//! Identity handed over by the authenticating gateway.
//!
//! The gateway verifies credentials and forwards the resolved user id in
//! [`USER_ID_HEADER`]. Handlers receive it as an explicit [`AuthenticatedUser`].

use crate::error::ApiError;
use crate::state::AppState;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use domain::{DomainError, UserId};

pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub UserId);

impl AuthenticatedUser {
    pub fn id(self) -> UserId {
        self.0
    }
}

fn header_user_id(parts: &Parts) -> Result<UserId, ApiError> {
    let raw = parts
        .headers
        .get(USER_ID_HEADER)
        .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))?;

    raw.to_str()
        .ok()
        .and_then(|value| value.trim().parse::<i32>().ok())
        .map(UserId)
        .ok_or_else(|| ApiError::Unauthorized("Malformed user identity".to_string()))
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let id = header_user_id(parts)?;

        match state.app.resolve_user(id).await {
            Ok(_) => Ok(AuthenticatedUser(id)),
            Err(DomainError::NotFound(_)) => {
                Err(ApiError::Unauthorized("Unknown user".to_string()))
            }
            Err(other) => Err(other.into()),
        }
    }
}
