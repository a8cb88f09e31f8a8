//! 产品处理器

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};

use super::{
    model::{ListQuery, Product, ProductStats, SearchQuery, SearchResults},
    service::ProductService,
    validation::ValidatedProduct,
};
use crate::core::error::{CoreError, CoreResult};
use crate::core::response::{MessageResponse, Page};
use crate::infrastructure::store::ProductStore;

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

impl AppState {
    pub fn new(store: ProductStore) -> Self {
        Self {
            product_service: ProductService::new(store),
        }
    }
}

// 查询串格式错误也统一成 ValidationError
fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> CoreResult<T> {
    query
        .map(|Query(params)| params)
        .map_err(|e| CoreError::validation(e.body_text()))
}

pub async fn root() -> &'static str {
    "Hello, World! Welcome to the Product API! Go to /api/products to see all products."
}

pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> CoreResult<Json<Page<Product>>> {
    let query = query_params(query)?;
    let page = state.product_service.list_products(&query)?;
    Ok(Json(page))
}

pub async fn search_products(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> CoreResult<Json<SearchResults>> {
    let query = query_params(query)?;
    let results = state.product_service.search_products(query.name.as_deref())?;
    Ok(Json(results))
}

pub async fn product_stats(State(state): State<AppState>) -> CoreResult<Json<ProductStats>> {
    Ok(Json(state.product_service.stats()?))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CoreResult<Json<Product>> {
    Ok(Json(state.product_service.get_product(&id)?))
}

pub async fn create_product(
    State(state): State<AppState>,
    ValidatedProduct(input): ValidatedProduct,
) -> (StatusCode, Json<Product>) {
    let product = state.product_service.create_product(input);
    (StatusCode::CREATED, Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedProduct(input): ValidatedProduct,
) -> CoreResult<Json<Product>> {
    Ok(Json(state.product_service.update_product(&id, input)?))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CoreResult<Json<MessageResponse>> {
    state.product_service.delete_product(&id)?;
    Ok(Json(MessageResponse::new("Product deleted successfully!")))
}
