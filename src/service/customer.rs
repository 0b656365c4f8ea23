use crate::{
    abstract_trait::{CustomerServiceTrait, DynCustomerRepository},
    domain::{
        requests::{CreateCustomerRequest, FindAllCustomers, UpdateCustomerRequest},
        response::{ApiResponse, ApiResponsePagination, CustomerResponse, Pagination},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct CustomerService {
    repository: DynCustomerRepository,
}

impl CustomerService {
    pub fn new(repository: DynCustomerRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CustomerServiceTrait for CustomerService {
    async fn find_all(
        &self,
        req: &FindAllCustomers,
    ) -> Result<ApiResponsePagination<Vec<CustomerResponse>>, ServiceError> {
        let (customers, total) = self.repository.find_all(req).await?;

        let data: Vec<CustomerResponse> = customers.into_iter().map(Into::into).collect();
        info!("Fetched {} customers", data.len());

        Ok(ApiResponsePagination::success(
            "Customers fetched successfully",
            data,
            Pagination::new(req.page, req.page_size, total),
        ))
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        let customer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound("Customer not found".into()))?;

        Ok(ApiResponse::success(
            "Customer fetched successfully",
            customer.into(),
        ))
    }

    async fn create(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        if self.repository.find_by_email(&req.email).await?.is_some() {
            return Err(
                RepositoryError::AlreadyExists("Email already registered".into()).into(),
            );
        }

        let customer = self.repository.create(req).await?;

        Ok(ApiResponse::success(
            "Customer created successfully",
            customer.into(),
        ))
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        if let Some(email) = &req.email {
            if let Some(existing) = self.repository.find_by_email(email).await? {
                if existing.id != id {
                    return Err(RepositoryError::AlreadyExists(
                        "Email already registered".into(),
                    )
                    .into());
                }
            }
        }

        let customer = self.repository.update(id, req).await?;

        Ok(ApiResponse::success(
            "Customer updated successfully",
            customer.into(),
        ))
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
