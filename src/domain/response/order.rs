use crate::{
    domain::response::customer::CustomerResponse,
    model::{OrderAggregate, OrderItemDetail},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Flat projection of one order line, as exposed by `/orders/{id}/items`
/// and embedded in the order aggregate.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderItemResponse {
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub subtotal: f64,
}

impl From<OrderItemDetail> for OrderItemResponse {
    fn from(value: OrderItemDetail) -> Self {
        OrderItemResponse {
            product_id: value.product_id,
            product_name: value.product_name,
            quantity: value.quantity,
            unit_price: value.unit_price,
            subtotal: value.subtotal,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i32,
    pub customer_id: i32,
    pub customer: CustomerResponse,
    pub order_date: String,
    pub status: String,
    pub total_amount: f64,
    pub items: Vec<OrderItemResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<OrderAggregate> for OrderResponse {
    fn from(value: OrderAggregate) -> Self {
        OrderResponse {
            id: value.order.id,
            customer_id: value.order.customer_id,
            customer: value.customer.into(),
            order_date: value.order.order_date.to_rfc3339(),
            status: value.order.status,
            total_amount: value.order.total_amount,
            items: value.items.into_iter().map(Into::into).collect(),
            created_at: value.order.created_at.to_rfc3339(),
            updated_at: value.order.updated_at.to_rfc3339(),
        }
    }
}
