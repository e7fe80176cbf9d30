use chrono::NaiveDate;
use serde::Serialize;

/// Envelope returned by `/getProductDetails`.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetailsResponse {
    pub product: ProductDetails,
}

/// Synthetic, randomized product document. Keys are camelCase on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    /// Five-digit mock identifier, rendered as a string.
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: &'static str,
    pub manufacturer: DetailedManufacturer,
    pub specifications: DetailedSpecifications,
    pub pricing: DetailedPricing,
    pub availability: Availability,
    pub reviews: Vec<DatedReview>,
    pub tags: Vec<&'static str>,
    pub related_products: Vec<RelatedProduct>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailedManufacturer {
    pub name: &'static str,
    pub address: Address,
    pub contact: Contact,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub postal_code: &'static str,
    pub country: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub phone: &'static str,
    pub email: &'static str,
    pub website: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailedSpecifications {
    pub dimensions: Dimensions,
    pub weight: &'static str,
    pub battery: Battery,
    pub features: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dimensions {
    pub width: &'static str,
    pub height: &'static str,
    pub depth: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Battery {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub capacity: &'static str,
    pub charging_time: &'static str,
    pub battery_life: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailedPricing {
    pub currency: &'static str,
    /// Rounded to cents.
    pub price: f64,
    pub discount: Discount,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub is_available: bool,
    pub percentage: u8,
    pub valid_until: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub in_stock: bool,
    pub stock_count: u32,
    pub warehouses: Vec<Warehouse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Warehouse {
    pub location: &'static str,
    pub stock: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatedReview {
    pub user: &'static str,
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct RelatedProduct {
    pub id: &'static str,
    pub name: &'static str,
    pub url: &'static str,
}
