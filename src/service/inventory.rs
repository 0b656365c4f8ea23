use crate::{
    abstract_trait::{DynInventoryRepository, DynProductRepository, InventoryServiceTrait},
    domain::{
        requests::{CreateInventoryRequest, FindAllInventory, UpdateInventoryRequest},
        response::{ApiResponse, ApiResponsePagination, InventoryResponse, Pagination},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct InventoryService {
    repository: DynInventoryRepository,
    product_repository: DynProductRepository,
}

impl InventoryService {
    pub fn new(repository: DynInventoryRepository, product_repository: DynProductRepository) -> Self {
        Self {
            repository,
            product_repository,
        }
    }
}

#[async_trait]
impl InventoryServiceTrait for InventoryService {
    async fn find_all(
        &self,
        req: &FindAllInventory,
    ) -> Result<ApiResponsePagination<Vec<InventoryResponse>>, ServiceError> {
        let (rows, total) = self.repository.find_all(req).await?;

        let data: Vec<InventoryResponse> = rows.into_iter().map(Into::into).collect();
        info!("Fetched {} inventory rows", data.len());

        Ok(ApiResponsePagination::success(
            "Inventory fetched successfully",
            data,
            Pagination::new(req.page, req.page_size, total),
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<InventoryResponse>, ServiceError> {
        let inventory = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound("Inventory not found".into()))?;

        Ok(ApiResponse::success(
            "Inventory fetched successfully",
            inventory.into(),
        ))
    }

    async fn find_by_product_id(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<InventoryResponse>, ServiceError> {
        let inventory = self
            .repository
            .find_by_product_id(product_id)
            .await?
            .ok_or_else(|| {
                RepositoryError::NotFound("Inventory for this product not found".into())
            })?;

        Ok(ApiResponse::success(
            "Inventory fetched successfully",
            inventory.into(),
        ))
    }

    async fn create(
        &self,
        req: &CreateInventoryRequest,
    ) -> Result<ApiResponse<InventoryResponse>, ServiceError> {
        if self
            .product_repository
            .find_by_id(req.product_id)
            .await?
            .is_none()
        {
            return Err(RepositoryError::NotFound("Product not found".into()).into());
        }

        if self
            .repository
            .find_by_product_id(req.product_id)
            .await?
            .is_some()
        {
            return Err(RepositoryError::AlreadyExists(
                "Inventory for this product already exists".into(),
            )
            .into());
        }

        let inventory = self.repository.create(req).await?;

        Ok(ApiResponse::success(
            "Inventory created successfully",
            inventory.into(),
        ))
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateInventoryRequest,
    ) -> Result<ApiResponse<InventoryResponse>, ServiceError> {
        let inventory = self.repository.update(id, req).await?;

        Ok(ApiResponse::success(
            "Inventory updated successfully",
            inventory.into(),
        ))
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
