use axum::{
    extract::{rejection::QueryRejection, Query},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::{debug, info};

use crate::{
    error::{AppError, AppResult},
    generator,
    models::{ProductDetailsQuery, ProductDetailsResponse, ProductInfo, ProductInfoQuery},
};

const PRODUCT_NAME_REQUIRED: &str = "Product name is required";
const PRODUCT_NAME_REQUIRED_AS_QUERY: &str = "Product name is required as a query parameter.";

/// Treat an absent parameter and an empty one the same way.
fn require(value: Option<String>, message: &'static str) -> AppResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::MissingParameter(message)),
    }
}

fn parse_query<T>(query: Result<Query<T>, QueryRejection>) -> AppResult<T> {
    query.map(|Query(q)| q).map_err(|rejection| {
        debug!(error = %rejection, "Malformed query string");
        AppError::BadRequest(rejection.body_text())
    })
}

// ── Static record ─────────────────────────────────────────────────────────────

pub async fn get_product_info(
    query: Result<Query<ProductInfoQuery>, QueryRejection>,
) -> AppResult<(StatusCode, Json<ProductInfo>)> {
    let name = require(parse_query(query)?.query, PRODUCT_NAME_REQUIRED)?;

    info!(product_name = %name, "Serving product info");

    Ok((StatusCode::OK, Json(ProductInfo::for_product(name))))
}

// ── Generated details ─────────────────────────────────────────────────────────

pub async fn get_product_details(
    query: Result<Query<ProductDetailsQuery>, QueryRejection>,
) -> AppResult<(StatusCode, Json<ProductDetailsResponse>)> {
    let name = require(
        parse_query(query)?.product_name,
        PRODUCT_NAME_REQUIRED_AS_QUERY,
    )?;

    let product =
        generator::generate_product_details(&mut rand::thread_rng(), &name, Utc::now().date_naive());

    info!(
        product_name = %name,
        id = %product.id,
        price = product.pricing.price,
        "Generated product details"
    );

    Ok((StatusCode::OK, Json(ProductDetailsResponse { product })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_absent_and_empty() {
        assert!(matches!(
            require(None, PRODUCT_NAME_REQUIRED),
            Err(AppError::MissingParameter(PRODUCT_NAME_REQUIRED))
        ));
        assert!(matches!(
            require(Some(String::new()), PRODUCT_NAME_REQUIRED),
            Err(AppError::MissingParameter(_))
        ));
    }

    #[test]
    fn require_keeps_whitespace_names() {
        assert_eq!(require(Some(" ".to_string()), PRODUCT_NAME_REQUIRED).unwrap(), " ");
    }
}
