use crate::{
    abstract_trait::{
        DynCustomerRepository, DynOrderCommandRepository, DynOrderQueryRepository,
        OrderCommandServiceTrait,
    },
    domain::{
        requests::{CreateOrderRequest, UpdateOrderRequest},
        response::{ApiResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct OrderCommandService {
    customer_repository: DynCustomerRepository,
    command: DynOrderCommandRepository,
    query: DynOrderQueryRepository,
}

impl OrderCommandService {
    pub fn new(
        customer_repository: DynCustomerRepository,
        command: DynOrderCommandRepository,
        query: DynOrderQueryRepository,
    ) -> Self {
        Self {
            customer_repository,
            command,
            query,
        }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        if self
            .customer_repository
            .find_by_id(req.customer_id)
            .await?
            .is_none()
        {
            return Err(RepositoryError::NotFound("Customer not found".into()).into());
        }

        let order_id = self.command.create_order(req).await?;

        let order = self.query.find_by_id(order_id).await?.ok_or_else(|| {
            ServiceError::Internal(format!("Order {order_id} vanished after creation"))
        })?;

        info!("Order {} placed for customer {}", order_id, req.customer_id);

        Ok(ApiResponse::success(
            "Order created successfully",
            order.into(),
        ))
    }

    async fn update_order(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        self.command.update_status(id, req.status.as_str()).await?;

        let order = self
            .query
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound("Order not found".into()))?;

        Ok(ApiResponse::success(
            "Order updated successfully",
            order.into(),
        ))
    }

    async fn delete_order(&self, id: i32) -> Result<(), ServiceError> {
        self.command.delete_order(id).await?;
        Ok(())
    }
}
