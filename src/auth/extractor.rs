use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::jwt::{self, TokenError};
use crate::error::AppError;
use crate::state::SharedState;

/// The authenticated principal for the current request, decoded from the
/// `Authorization: Bearer <token>` header. Every request re-verifies; no
/// session state survives between requests.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
    pub role: String,
}

impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("authorization")
            .ok_or(AppError::MissingToken)?;

        let auth_str = header.to_str().map_err(|_| AppError::MissingToken)?;

        let token = auth_str.strip_prefix("Bearer ").map(str::trim).unwrap_or("");
        if token.is_empty() {
            return Err(AppError::MissingToken);
        }

        let claims = jwt::decode_token(token, &state.config.jwt_secret).map_err(|e| match e {
            TokenError::Expired => AppError::ExpiredToken,
            TokenError::Invalid => AppError::InvalidToken,
        })?;

        Ok(AuthUser {
            email: claims.email,
            role: claims.role,
        })
    }
}
