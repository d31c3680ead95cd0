use std::sync::LazyLock;

use regex::Regex;

use crate::error::AppError;
use crate::models::{NewProduct, ProductPayload};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

const NAME_MAX: usize = 255;

/// Validate login input. Collects every violation instead of stopping at the
/// first one.
pub fn login(email: Option<&str>, password: Option<&str>) -> Result<(String, String), AppError> {
    let mut details = Vec::new();

    let email = email.map(str::trim).unwrap_or("");
    if email.is_empty() {
        details.push("Email é obrigatório".to_string());
    } else if !EMAIL_RE.is_match(email) {
        details.push("Email inválido".to_string());
    }

    let password = password.unwrap_or("");
    if password.is_empty() {
        details.push("Senha é obrigatória".to_string());
    }

    if details.is_empty() {
        Ok((email.to_string(), password.to_string()))
    } else {
        Err(AppError::Validation(details))
    }
}

/// Validate a product payload, collecting every violation, and apply the
/// defaults (`stock` 0, `active` true) on success.
pub fn product(payload: &ProductPayload) -> Result<NewProduct, AppError> {
    let mut details = Vec::new();

    let name = payload.name.as_deref().map(str::trim).unwrap_or("");
    if name.is_empty() {
        details.push("Nome é obrigatório".to_string());
    } else if name.chars().count() > NAME_MAX {
        details.push("Nome deve ter no máximo 255 caracteres".to_string());
    }

    match payload.price {
        None => details.push("Preço é obrigatório".to_string()),
        Some(price) if price < 0.0 => {
            details.push("Preço deve ser maior ou igual a zero".to_string());
        }
        Some(_) => {}
    }

    let category = payload.category.as_deref().map(str::trim).unwrap_or("");
    if category.is_empty() {
        details.push("Categoria é obrigatória".to_string());
    }

    let mut stock = 0i64;
    if let Some(raw) = payload.stock {
        if raw.fract() != 0.0 {
            details.push("Estoque deve ser um número inteiro".to_string());
        } else if raw < 0.0 {
            details.push("Estoque deve ser maior ou igual a zero".to_string());
        } else {
            stock = raw as i64;
        }
    }

    if !details.is_empty() {
        return Err(AppError::Validation(details));
    }

    Ok(NewProduct {
        name: name.to_string(),
        description: payload.description.clone(),
        price: payload.price.unwrap_or(0.0),
        category: category.to_string(),
        stock,
        active: payload.active.unwrap_or(true),
    })
}
