use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::{NewProduct, Product};

/// Visibility filter for listings. Anything other than `"all"` or `"true"`
/// in the query string selects inactive records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveFilter {
    Active,
    Inactive,
    All,
}

impl ActiveFilter {
    pub fn from_query(value: &str) -> Self {
        match value {
            "all" => ActiveFilter::All,
            "true" => ActiveFilter::Active,
            _ => ActiveFilter::Inactive,
        }
    }

    fn as_bool(self) -> Option<bool> {
        match self {
            ActiveFilter::Active => Some(true),
            ActiveFilter::Inactive => Some(false),
            ActiveFilter::All => None,
        }
    }
}

pub async fn list(
    pool: &SqlitePool,
    filter: ActiveFilter,
    limit: i64,
    offset: i64,
) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "SELECT * FROM products WHERE (?1 IS NULL OR active = ?1)
         ORDER BY created_at DESC, id DESC LIMIT ?2 OFFSET ?3",
    )
    .bind(filter.as_bool())
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn count(pool: &SqlitePool, filter: ActiveFilter) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE (?1 IS NULL OR active = ?1)")
        .bind(filter.as_bool())
        .fetch_one(pool)
        .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &SqlitePool, input: &NewProduct) -> Result<Product, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, description, price, category, stock, active, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7) RETURNING *",
    )
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.price)
    .bind(&input.category)
    .bind(input.stock)
    .bind(input.active)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Full replacement of the mutable fields. Returns `None` when the id does
/// not exist.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    input: &NewProduct,
) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "UPDATE products SET name = ?2, description = ?3, price = ?4, category = ?5,
         stock = ?6, active = ?7, updated_at = ?8 WHERE id = ?1 RETURNING *",
    )
    .bind(id)
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.price)
    .bind(&input.category)
    .bind(input.stock)
    .bind(input.active)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

/// Hard delete. Returns `false` when the id does not exist.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM products WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
