use crate::{
    abstract_trait::{DynProductRepository, ProductServiceTrait},
    domain::{
        requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
        response::{ApiResponse, ApiResponsePagination, Pagination, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct ProductService {
    repository: DynProductRepository,
}

impl ProductService {
    pub fn new(repository: DynProductRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        let (products, total) = self.repository.find_all(req).await?;

        let data: Vec<ProductResponse> = products.into_iter().map(Into::into).collect();
        info!("Fetched {} products", data.len());

        Ok(ApiResponsePagination::success(
            "Products fetched successfully",
            data,
            Pagination::new(req.page, req.page_size, total),
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound("Product not found".into()))?;

        Ok(ApiResponse::success(
            "Product fetched successfully",
            product.into(),
        ))
    }

    async fn create(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        if self.repository.find_by_sku(&req.sku).await?.is_some() {
            return Err(RepositoryError::AlreadyExists(
                "Product with this SKU already exists".into(),
            )
            .into());
        }

        let product = self.repository.create(req).await?;

        Ok(ApiResponse::success(
            "Product created successfully",
            product.into(),
        ))
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        if let Some(sku) = &req.sku {
            if let Some(existing) = self.repository.find_by_sku(sku).await? {
                if existing.id != id {
                    return Err(RepositoryError::AlreadyExists(
                        "Product with this SKU already exists".into(),
                    )
                    .into());
                }
            }
        }

        let product = self.repository.update(id, req).await?;

        Ok(ApiResponse::success(
            "Product updated successfully",
            product.into(),
        ))
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
