use crate::{
    abstract_trait::DynInventoryService,
    domain::{
        requests::{CreateInventoryRequest, FindAllInventory, UpdateInventoryRequest},
        response::{ApiResponse, ApiResponsePagination, InventoryResponse},
    },
    errors::HttpError,
    middleware::{SimpleValidatedJson, ValidatedQuery},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/inventory",
    tag = "Inventory",
    params(FindAllInventory),
    responses(
        (status = 200, description = "List of inventory rows", body = ApiResponsePagination<Vec<InventoryResponse>>),
        (status = 400, description = "Invalid pagination parameters")
    )
)]
pub async fn get_inventories(
    Extension(service): Extension<DynInventoryService>,
    ValidatedQuery(params): ValidatedQuery<FindAllInventory>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/inventory/{id}",
    tag = "Inventory",
    params(("id" = i32, Path, description = "Inventory ID")),
    responses(
        (status = 200, description = "Inventory details", body = ApiResponse<InventoryResponse>),
        (status = 404, description = "Inventory not found")
    )
)]
pub async fn get_inventory(
    Extension(service): Extension<DynInventoryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/inventory/product/{product_id}",
    tag = "Inventory",
    params(("product_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Inventory for the product", body = ApiResponse<InventoryResponse>),
        (status = 404, description = "No inventory for this product")
    )
)]
pub async fn get_inventory_by_product(
    Extension(service): Extension<DynInventoryService>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_product_id(product_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/inventory",
    tag = "Inventory",
    request_body = CreateInventoryRequest,
    responses(
        (status = 201, description = "Inventory created", body = ApiResponse<InventoryResponse>),
        (status = 400, description = "Validation error or inventory already exists"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn create_inventory(
    Extension(service): Extension<DynInventoryService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateInventoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/inventory/{id}",
    tag = "Inventory",
    params(("id" = i32, Path, description = "Inventory ID")),
    request_body = UpdateInventoryRequest,
    responses(
        (status = 200, description = "Inventory updated", body = ApiResponse<InventoryResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Inventory not found")
    )
)]
pub async fn update_inventory(
    Extension(service): Extension<DynInventoryService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateInventoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/inventory/{id}",
    tag = "Inventory",
    params(("id" = i32, Path, description = "Inventory ID")),
    responses(
        (status = 204, description = "Inventory deleted"),
        (status = 404, description = "Inventory not found")
    )
)]
pub async fn delete_inventory(
    Extension(service): Extension<DynInventoryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn inventory_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/inventory", get(get_inventories))
        .route("/inventory", post(create_inventory))
        .route("/inventory/product/{product_id}", get(get_inventory_by_product))
        .route("/inventory/{id}", get(get_inventory))
        .route("/inventory/{id}", put(update_inventory))
        .route("/inventory/{id}", delete(delete_inventory))
        .layer(Extension(app_state.di_container.inventory_service.clone()))
}
