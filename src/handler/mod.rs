mod customer;
mod inventory;
mod order;
mod product;

use crate::state::AppState;
use crate::utils::shutdown_signal;
use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::customer::customer_routes;
pub use self::inventory::inventory_routes;
pub use self::order::order_routes;
pub use self::product::product_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        customer::get_customers,
        customer::get_customer,
        customer::create_customer,
        customer::update_customer,
        customer::delete_customer,

        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,

        inventory::get_inventories,
        inventory::get_inventory,
        inventory::get_inventory_by_product,
        inventory::create_inventory,
        inventory::update_inventory,
        inventory::delete_inventory,

        order::get_orders,
        order::get_order,
        order::get_order_items,
        order::create_order,
        order::update_order,
        order::delete_order,
    ),
    tags(
        (name = "Customer", description = "Customer endpoints"),
        (name = "Product", description = "Product endpoints"),
        (name = "Inventory", description = "Inventory endpoints"),
        (name = "Order", description = "Order endpoints"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(customer_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(inventory_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
