//! 路由组装

use std::any::Any;

use axum::{
    http::{Method, Uri},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use super::product::handler::{
    create_product, delete_product, get_product, list_products, product_stats, root,
    search_products, update_product, AppState,
};
use crate::core::error::CoreError;
use crate::core::middleware::{request_logging_middleware, require_api_key, ApiKey};

/// 创建应用路由
///
/// 中间件顺序：请求日志 -> (写操作) 认证 -> (创建/更新) 请求体校验 -> 处理器。
/// 校验在 [`ValidatedProduct`](super::product::validation::ValidatedProduct) 提取器中完成，
/// 所以总是在认证之后执行。
pub fn create_router(state: AppState, api_key: ApiKey) -> Router {
    let public = Router::new()
        .route("/", get(root))
        .route("/api/products", get(list_products))
        .route("/api/products/search", get(search_products))
        .route("/api/products/stats", get(product_stats))
        .route("/api/products/:id", get(get_product));

    let protected = Router::new()
        .route("/api/products", post(create_product))
        .route(
            "/api/products/:id",
            put(update_product).delete(delete_product),
        )
        .route_layer(middleware::from_fn_with_state(api_key, require_api_key));

    // 必须在 merge 之后设置，替换掉被认证层包裹的默认 405 回退
    public
        .merge(protected)
        .method_not_allowed_fallback(route_not_found)
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        )
        .layer(middleware::from_fn(request_logging_middleware))
        .with_state(state)
}

async fn route_not_found(method: Method, uri: Uri) -> CoreError {
    CoreError::not_found(format!("Route {} {} not found", method, uri.path()))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    CoreError::internal(format!("handler panicked: {}", detail)).into_response()
}
