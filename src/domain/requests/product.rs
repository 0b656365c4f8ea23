use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

#[derive(Debug, Serialize, Deserialize, Validate, IntoParams)]
pub struct FindAllProducts {
    #[validate(range(min = 1))]
    #[serde(default = "default_page")]
    pub page: i32,

    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_page_size")]
    pub page_size: i32,

    /// Case-insensitive partial match on the product name.
    pub name: Option<String>,

    #[validate(range(min = 0.0))]
    pub min_price: Option<f64>,

    #[validate(range(min = 0.0))]
    pub max_price: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,

    #[validate(length(min = 1, max = 255))]
    pub sku: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(range(exclusive_min = 0.0))]
    pub price: Option<f64>,

    #[validate(length(min = 1, max = 255))]
    pub sku: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_product() -> CreateProductRequest {
        CreateProductRequest {
            name: "Widget".into(),
            description: None,
            price: 19.99,
            sku: "WID-001".into(),
        }
    }

    #[test]
    fn rejects_zero_price() {
        let mut req = base_product();
        req.price = 0.0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_negative_price() {
        let mut req = base_product();
        req.price = -1.5;
        assert!(req.validate().is_err());
    }

    #[test]
    fn accepts_valid_product() {
        assert!(base_product().validate().is_ok());
    }

    #[test]
    fn rejects_negative_price_filter() {
        let params = FindAllProducts {
            page: 1,
            page_size: 10,
            name: None,
            min_price: Some(-0.01),
            max_price: None,
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_oversized_page() {
        let params = FindAllProducts {
            page: 1,
            page_size: 500,
            name: None,
            min_price: None,
            max_price: None,
        };
        assert!(params.validate().is_err());
    }
}
