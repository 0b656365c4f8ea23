mod customer;
mod inventory;
mod order;
mod product;

pub use self::customer::Customer;
pub use self::inventory::Inventory;
pub use self::order::{Order, OrderAggregate, OrderItem, OrderItemDetail};
pub use self::product::Product;
