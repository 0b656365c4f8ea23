use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::{
        requests::FindAllOrders,
        response::{
            ApiResponse, ApiResponsePagination, OrderItemResponse, OrderResponse, Pagination,
        },
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError> {
        let (orders, total) = self.query.find_all(req).await?;

        let data: Vec<OrderResponse> = orders.into_iter().map(Into::into).collect();
        info!("Fetched {} orders", data.len());

        Ok(ApiResponsePagination::success(
            "Orders fetched successfully",
            data,
            Pagination::new(req.page, req.page_size, total),
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self
            .query
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound("Order not found".into()))?;

        Ok(ApiResponse::success(
            "Order fetched successfully",
            order.into(),
        ))
    }

    async fn find_items(
        &self,
        order_id: i32,
    ) -> Result<ApiResponse<Vec<OrderItemResponse>>, ServiceError> {
        let items = self
            .query
            .find_items(order_id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound("Order not found".into()))?;

        Ok(ApiResponse::success(
            "Order items fetched successfully",
            items.into_iter().map(Into::into).collect(),
        ))
    }
}
