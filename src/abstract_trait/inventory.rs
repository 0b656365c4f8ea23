use crate::{
    domain::{
        requests::{CreateInventoryRequest, FindAllInventory, UpdateInventoryRequest},
        response::{ApiResponse, ApiResponsePagination, InventoryResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Inventory,
};
use async_trait::async_trait;
use sqlx::PgConnection;
use std::sync::Arc;

pub type DynInventoryRepository = Arc<dyn InventoryRepositoryTrait + Send + Sync>;
pub type DynInventoryService = Arc<dyn InventoryServiceTrait + Send + Sync>;

/// Entity-store access for inventory rows plus the ledger operations the
/// order flow runs inside its transaction. The in-transaction methods take
/// the caller's connection so reservation and restoration commit or roll
/// back together with the order they belong to.
#[async_trait]
pub trait InventoryRepositoryTrait {
    async fn find_all(
        &self,
        req: &FindAllInventory,
    ) -> Result<(Vec<Inventory>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Inventory>, RepositoryError>;
    async fn find_by_product_id(&self, product_id: i32)
    -> Result<Option<Inventory>, RepositoryError>;
    async fn create(&self, req: &CreateInventoryRequest) -> Result<Inventory, RepositoryError>;
    /// Restock semantics: bumps `last_restock_date` only when the new
    /// quantity exceeds the current one.
    async fn update(
        &self,
        id: i32,
        req: &UpdateInventoryRequest,
    ) -> Result<Inventory, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;

    async fn check_availability(
        &self,
        conn: &mut PgConnection,
        product_id: i32,
        quantity: i32,
    ) -> Result<bool, RepositoryError>;
    /// Conditional atomic decrement; fails with `InsufficientInventory`
    /// when stock is missing or short.
    async fn reserve(
        &self,
        conn: &mut PgConnection,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), RepositoryError>;
    /// Unconditional increment; a missing inventory row is ignored.
    async fn restore(
        &self,
        conn: &mut PgConnection,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait InventoryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllInventory,
    ) -> Result<ApiResponsePagination<Vec<InventoryResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<InventoryResponse>, ServiceError>;
    async fn find_by_product_id(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<InventoryResponse>, ServiceError>;
    async fn create(
        &self,
        req: &CreateInventoryRequest,
    ) -> Result<ApiResponse<InventoryResponse>, ServiceError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateInventoryRequest,
    ) -> Result<ApiResponse<InventoryResponse>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}
