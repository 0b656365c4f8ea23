use crate::{
    domain::{
        requests::{CreateOrderRequest, FindAllOrders, UpdateOrderRequest},
        response::{ApiResponse, ApiResponsePagination, OrderItemResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order, OrderAggregate, OrderItemDetail},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<(Vec<OrderAggregate>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<OrderAggregate>, RepositoryError>;
    /// `None` when the order itself does not exist.
    async fn find_items(&self, order_id: i32)
    -> Result<Option<Vec<OrderItemDetail>>, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Runs the whole assembly inside one transaction and returns the new
    /// order's id. Any per-item failure rolls everything back.
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<i32, RepositoryError>;
    async fn update_status(&self, id: i32, status: &str) -> Result<Order, RepositoryError>;
    /// Restores inventory for every line, then deletes the order (items
    /// cascade), all in one transaction.
    async fn delete_order(&self, id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn find_items(
        &self,
        order_id: i32,
    ) -> Result<ApiResponse<Vec<OrderItemResponse>>, ServiceError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn update_order(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn delete_order(&self, id: i32) -> Result<(), ServiceError>;
}
