mod customer;
mod inventory;
mod order;
mod product;

pub use self::customer::CustomerRepository;
pub use self::inventory::InventoryRepository;
pub use self::order::{OrderCommandRepository, OrderQueryRepository};
pub use self::product::ProductRepository;
