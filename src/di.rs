use crate::{
    abstract_trait::{
        DynCustomerRepository, DynCustomerService, DynInventoryRepository, DynInventoryService,
        DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
        DynOrderQueryService, DynProductRepository, DynProductService,
    },
    config::ConnectionPool,
    repository::{
        CustomerRepository, InventoryRepository, OrderCommandRepository, OrderQueryRepository,
        ProductRepository,
    },
    service::{
        CustomerService, InventoryService, OrderCommandService, OrderQueryService, ProductService,
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub customer_service: DynCustomerService,
    pub product_service: DynProductService,
    pub inventory_service: DynInventoryService,
    pub order_query_service: DynOrderQueryService,
    pub order_command_service: DynOrderCommandService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("customer_service", &"DynCustomerService")
            .field("product_service", &"DynProductService")
            .field("inventory_service", &"DynInventoryService")
            .field("order_query_service", &"DynOrderQueryService")
            .field("order_command_service", &"DynOrderCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let customer_repository: DynCustomerRepository =
            Arc::new(CustomerRepository::new(pool.clone()));
        let product_repository: DynProductRepository =
            Arc::new(ProductRepository::new(pool.clone()));
        let inventory_repository: DynInventoryRepository =
            Arc::new(InventoryRepository::new(pool.clone()));
        let order_query_repository: DynOrderQueryRepository =
            Arc::new(OrderQueryRepository::new(pool.clone()));
        let order_command_repository: DynOrderCommandRepository = Arc::new(
            OrderCommandRepository::new(pool, inventory_repository.clone()),
        );

        let customer_service: DynCustomerService =
            Arc::new(CustomerService::new(customer_repository.clone()));
        let product_service: DynProductService =
            Arc::new(ProductService::new(product_repository.clone()));
        let inventory_service: DynInventoryService = Arc::new(InventoryService::new(
            inventory_repository,
            product_repository,
        ));
        let order_query_service: DynOrderQueryService =
            Arc::new(OrderQueryService::new(order_query_repository.clone()));
        let order_command_service: DynOrderCommandService = Arc::new(OrderCommandService::new(
            customer_repository,
            order_command_repository,
            order_query_repository,
        ));

        Self {
            customer_service,
            product_service,
            inventory_service,
            order_query_service,
            order_command_service,
        }
    }
}
