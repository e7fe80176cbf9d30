use serde::Serialize;

/// Static product record served by `/getProductInfo`.
/// Only `product_name` varies between responses; every other field is constant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductInfo {
    pub product_name: String,
    pub specifications: Specifications,
    pub pricing: Pricing,
    pub manufacturer: Manufacturer,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Specifications {
    pub color: &'static str,
    pub battery_life: &'static str,
    pub dimensions: &'static str,
    pub weight: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pricing {
    pub price: f64,
    pub currency: &'static str,
    pub availability: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manufacturer {
    pub name: &'static str,
    pub website: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub user: &'static str,
    pub rating: f64,
    pub comment: &'static str,
}

const SPECIFICATIONS: Specifications = Specifications {
    color: "Red",
    battery_life: "12 hours",
    dimensions: "10x8x6 inches",
    weight: "1.2 kg",
};

const PRICING: Pricing = Pricing {
    price: 199.99,
    currency: "USD",
    availability: "In Stock",
};

const MANUFACTURER: Manufacturer = Manufacturer {
    name: "RoboTech Inc.",
    website: "https://www.robotech.com",
};

const REVIEWS: &[Review] = &[Review {
    user: "John Doe",
    rating: 4.5,
    comment: "Great robot! Does everything I need.",
}];

impl ProductInfo {
    pub fn for_product(name: impl Into<String>) -> Self {
        Self {
            product_name: name.into(),
            specifications: SPECIFICATIONS,
            pricing: PRICING,
            manufacturer: MANUFACTURER,
            reviews: REVIEWS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_is_the_only_dynamic_field() {
        let mut a = ProductInfo::for_product("RoboVac3000");
        let b = ProductInfo::for_product("Toaster");
        assert_ne!(a, b);
        a.product_name = "Toaster".to_string();
        assert_eq!(a, b);
    }

    #[test]
    fn serializes_to_expected_document() {
        let value = serde_json::to_value(ProductInfo::for_product("RoboVac3000")).unwrap();
        assert_eq!(
            value,
            json!({
                "product_name": "RoboVac3000",
                "specifications": {
                    "color": "Red",
                    "battery_life": "12 hours",
                    "dimensions": "10x8x6 inches",
                    "weight": "1.2 kg"
                },
                "pricing": {
                    "price": 199.99,
                    "currency": "USD",
                    "availability": "In Stock"
                },
                "manufacturer": {
                    "name": "RoboTech Inc.",
                    "website": "https://www.robotech.com"
                },
                "reviews": [
                    {
                        "user": "John Doe",
                        "rating": 4.5,
                        "comment": "Great robot! Does everything I need."
                    }
                ]
            })
        );
    }

    #[test]
    fn price_renders_without_float_noise() {
        let text = serde_json::to_string(&ProductInfo::for_product("x")).unwrap();
        assert!(text.contains(r#""price":199.99"#), "{text}");
        assert!(text.starts_with(r#"{"product_name":"x","specifications""#));
    }
}
