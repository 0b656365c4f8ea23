use crate::model::Inventory;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct InventoryResponse {
    pub id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub last_restock_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Inventory> for InventoryResponse {
    fn from(value: Inventory) -> Self {
        InventoryResponse {
            id: value.id,
            product_id: value.product_id,
            quantity: value.quantity,
            last_restock_date: value.last_restock_date.map(|dt| dt.to_rfc3339()),
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}
