use crate::{
    domain::{
        requests::{CreateCustomerRequest, FindAllCustomers, UpdateCustomerRequest},
        response::{ApiResponse, ApiResponsePagination, CustomerResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Customer,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCustomerRepository = Arc<dyn CustomerRepositoryTrait + Send + Sync>;
pub type DynCustomerService = Arc<dyn CustomerServiceTrait + Send + Sync>;

#[async_trait]
pub trait CustomerRepositoryTrait {
    async fn find_all(&self, req: &FindAllCustomers)
    -> Result<(Vec<Customer>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, RepositoryError>;
    async fn create(&self, req: &CreateCustomerRequest) -> Result<Customer, RepositoryError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateCustomerRequest,
    ) -> Result<Customer, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait CustomerServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllCustomers,
    ) -> Result<ApiResponsePagination<Vec<CustomerResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CustomerResponse>, ServiceError>;
    async fn create(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}
