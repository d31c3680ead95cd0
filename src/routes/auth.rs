use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::auth::credentials::Principal;
use crate::auth::jwt::{Claims, encode_token};
use crate::error::AppError;
use crate::extract::AppJson;
use crate::state::SharedState;
use crate::validate;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: Principal,
}

pub async fn login(
    State(state): State<SharedState>,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (email, password) = validate::login(req.email.as_deref(), req.password.as_deref())?;

    let principal = state
        .credentials
        .verify(&email, &password)
        .ok_or(AppError::InvalidCredentials)?;

    let claims = Claims::new(&principal.email, &principal.role);
    let token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    Ok(Json(LoginResponse {
        token,
        user: principal,
    }))
}
