mod api;
mod customer;
mod inventory;
mod order;
mod pagination;
mod product;

pub use self::api::{ApiResponse, ApiResponsePagination};
pub use self::customer::CustomerResponse;
pub use self::inventory::InventoryResponse;
pub use self::order::{OrderItemResponse, OrderResponse};
pub use self::pagination::Pagination;
pub use self::product::ProductResponse;
