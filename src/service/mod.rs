mod customer;
mod inventory;
mod order;
mod product;

pub use self::customer::CustomerService;
pub use self::inventory::InventoryService;
pub use self::order::{OrderCommandService, OrderQueryService};
pub use self::product::ProductService;
