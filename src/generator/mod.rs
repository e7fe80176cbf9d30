use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{
    Address, Availability, Battery, Contact, DatedReview, DetailedManufacturer, DetailedPricing,
    DetailedSpecifications, Dimensions, Discount, ProductDetails, RelatedProduct, Warehouse,
};

static FEATURES: &[&str] = &[
    "Wireless connectivity",
    "AI-powered automation",
    "Sleek and portable design",
    "Eco-friendly materials",
];

static TAGS: &[&str] = &["smart device", "electronics", "AI", "innovative", "portable"];

static DISCOUNT_PERCENTAGES: &[u8] = &[5, 10, 15];

static WAREHOUSES: &[&str] = &["San Francisco, CA", "Austin, TX"];

static RELATED: &[(&str, &str, &str)] = &[
    ("45678", "SmartGadget Pro", "https://www.example.com/products/45678"),
    ("78901", "EcoTech Device", "https://www.example.com/products/78901"),
];

/// Build a randomized product document for `name`.
///
/// Dates are computed relative to `today` so callers (and tests) control the clock.
pub fn generate_product_details(rng: &mut impl Rng, name: &str, today: NaiveDate) -> ProductDetails {
    // Prices are drawn in cents: $50.00 – $300.00
    let price = rng.gen_range(5_000u32..=30_000) as f64 / 100.0;

    let discount = Discount {
        is_available: true,
        percentage: *DISCOUNT_PERCENTAGES.choose(rng).unwrap_or(&10),
        valid_until: today + Duration::days(rng.gen_range(5i64..=20)),
    };

    let warehouses = WAREHOUSES
        .iter()
        .map(|&location| Warehouse {
            location,
            stock: rng.gen_range(10..=50),
        })
        .collect();

    let reviews = vec![
        DatedReview {
            user: "techlover",
            rating: rng.gen_range(4..=5),
            comment: format!("The {} is amazing and very reliable!", name),
            date: today - Duration::days(rng.gen_range(1i64..=30)),
        },
        DatedReview {
            user: "gadgetguru",
            rating: rng.gen_range(3..=5),
            comment: format!(
                "I loved the features of {}, but the battery life could improve.",
                name
            ),
            date: today - Duration::days(rng.gen_range(1i64..=30)),
        },
    ];

    ProductDetails {
        id: rng.gen_range(10_000u32..=99_999).to_string(),
        name: name.to_string(),
        description: format!(
            "The {} is a state-of-the-art product designed for excellence.",
            name
        ),
        category: "Electronics",
        manufacturer: DetailedManufacturer {
            name: "Tech Innovators Inc.",
            address: Address {
                street: "789 Technology Blvd",
                city: "Tech City",
                state: "California",
                postal_code: "94025",
                country: "USA",
            },
            contact: Contact {
                phone: "+1-800-TECH-123",
                email: "support@techinnovators.com",
                website: "https://www.techinnovators.com",
            },
        },
        specifications: DetailedSpecifications {
            dimensions: Dimensions {
                width: "12 cm",
                height: "18 cm",
                depth: "5 cm",
            },
            weight: "1.1 kg",
            battery: Battery {
                kind: "Rechargeable lithium-ion",
                capacity: "2500mAh",
                charging_time: "2 hours",
                battery_life: "8 hours",
            },
            features: FEATURES.to_vec(),
        },
        pricing: DetailedPricing {
            currency: "USD",
            price,
            discount,
        },
        availability: Availability {
            in_stock: true,
            stock_count: rng.gen_range(20..=100),
            warehouses,
        },
        reviews,
        tags: TAGS.to_vec(),
        related_products: RELATED
            .iter()
            .map(|&(id, name, url)| RelatedProduct { id, name, url })
            .collect(),
    }
}
