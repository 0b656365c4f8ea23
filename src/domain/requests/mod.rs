mod customer;
mod inventory;
mod order;
mod product;

pub use self::customer::{CreateCustomerRequest, FindAllCustomers, UpdateCustomerRequest};
pub use self::inventory::{CreateInventoryRequest, FindAllInventory, UpdateInventoryRequest};
pub use self::order::{
    CreateOrderItemRequest, CreateOrderRequest, FindAllOrders, OrderStatus, UpdateOrderRequest,
};
pub use self::product::{CreateProductRequest, FindAllProducts, UpdateProductRequest};
