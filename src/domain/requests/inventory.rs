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
pub struct FindAllInventory {
    #[validate(range(min = 1))]
    #[serde(default = "default_page")]
    pub page: i32,

    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_page_size")]
    pub page_size: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateInventoryRequest {
    #[validate(range(min = 1))]
    pub product_id: i32,

    #[validate(range(min = 0))]
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateInventoryRequest {
    #[validate(range(min = 0))]
    pub quantity: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_quantity() {
        let req = CreateInventoryRequest {
            product_id: 1,
            quantity: -3,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn accepts_zero_quantity() {
        let req = CreateInventoryRequest {
            product_id: 1,
            quantity: 0,
        };
        assert!(req.validate().is_ok());
    }
}
