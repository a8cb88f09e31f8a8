//! 核心中间件模块

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::error::CoreError;

/// 写操作需要携带的请求头
pub const API_KEY_HEADER: &str = "x-api-key";

/// 请求日志中间件
///
/// 每个请求进入时记录方法、原始路径和 ISO-8601 时间戳，
/// 响应返回后再记录状态码和耗时。不会拦截任何请求。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    info!("{} {} [{}]", method, uri, timestamp);

    let response = next.run(req).await;

    debug!(
        "{} {} - {} - {}ms",
        method,
        uri,
        response.status(),
        start.elapsed().as_millis()
    );

    response
}

/// 认证中间件使用的共享密钥
#[derive(Clone, Default)]
pub struct ApiKey(Option<Arc<str>>);

impl ApiKey {
    pub fn new(key: Option<String>) -> Self {
        Self(key.map(Arc::from))
    }

    /// 未配置密钥时任何请求都不匹配
    pub fn matches(&self, candidate: Option<&str>) -> bool {
        match (self.0.as_deref(), candidate) {
            (Some(expected), Some(given)) => expected == given,
            _ => false,
        }
    }
}

/// 认证中间件
///
/// 只挂载在创建、更新、删除路由上。
pub async fn require_api_key(
    State(api_key): State<ApiKey>,
    req: Request,
    next: Next,
) -> Result<Response, CoreError> {
    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok());

    if !api_key.matches(provided) {
        return Err(CoreError::authentication(
            "Unauthorized: Invalid or missing API key",
        ));
    }

    Ok(next.run(req).await)
}
