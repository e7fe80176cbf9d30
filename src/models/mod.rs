pub mod product_details;
pub mod product_info;

pub use product_details::*;
pub use product_info::*;

use serde::Deserialize;

// ── Query parameters ──────────────────────────────────────────────────────────

/// `GET /getProductInfo?query=...`
#[derive(Debug, Deserialize, Default)]
pub struct ProductInfoQuery {
    pub query: Option<String>,
}

/// `GET /getProductDetails?product_name=...`
#[derive(Debug, Deserialize, Default)]
pub struct ProductDetailsQuery {
    pub product_name: Option<String>,
}
