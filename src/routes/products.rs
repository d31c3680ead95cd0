use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::db::products::ActiveFilter;
use crate::error::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::models::{Pagination, Product, ProductPage, ProductPayload};
use crate::state::SharedState;
use crate::validate;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub active: Option<String>,
}

pub async fn list(
    _auth: AuthUser,
    State(state): State<SharedState>,
    AppQuery(params): AppQuery<ListParams>,
) -> Result<Json<ProductPage>, AppError> {
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(10).max(1);
    let offset = (page - 1) * limit;
    let filter = ActiveFilter::from_query(params.active.as_deref().unwrap_or("true"));

    let total = db::products::count(&state.pool, filter).await?;
    let products = db::products::list(&state.pool, filter, limit, offset).await?;

    // Out-of-range pages are not an error; they yield an empty list.
    Ok(Json(ProductPage {
        products,
        pagination: Pagination {
            total,
            page,
            limit,
            total_pages: (total + limit - 1) / limit,
        },
    }))
}

pub async fn get(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, AppError> {
    let product = db::products::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Produto não encontrado".to_string()))?;
    Ok(Json(product))
}

pub async fn create(
    _auth: AuthUser,
    State(state): State<SharedState>,
    AppJson(payload): AppJson<ProductPayload>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let input = validate::product(&payload)?;
    let product = db::products::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<ProductPayload>,
) -> Result<Json<Product>, AppError> {
    let input = validate::product(&payload)?;
    let product = db::products::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound("Produto não encontrado".to_string()))?;
    Ok(Json(product))
}

pub async fn delete(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let deleted = db::products::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::NotFound("Produto não encontrado".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}
