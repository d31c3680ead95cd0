use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    /// Input failed shape validation. Carries every violated rule.
    Validation(Vec<String>),
    InvalidCredentials,
    MissingToken,
    InvalidToken,
    ExpiredToken,
    NotFound(String),
    Internal(String),
    Database(sqlx::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(details) => write!(f, "Validation: {}", details.join(", ")),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::MissingToken => write!(f, "Missing access token"),
            AppError::InvalidToken => write!(f, "Invalid token"),
            AppError::ExpiredToken => write!(f, "Expired token"),
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
            AppError::Database(err) => write!(f, "Database Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Dados de entrada inválidos", "details": details }),
            ),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "Credenciais inválidas" }),
            ),
            AppError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "Token de acesso requerido" }),
            ),
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "Token inválido" }),
            ),
            AppError::ExpiredToken => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "Token expirado" }),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Erro interno do servidor" }),
                )
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Erro interno do servidor" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}
