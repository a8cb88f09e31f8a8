//! # Product API
//!
//! 基于 Axum 的内存产品目录 REST 服务，演示路由、中间件组合和统一错误处理。
//!
//! 分层结构：
//! - `app`：路由和产品处理器、业务服务、请求体校验
//! - `core`：配置、错误类型、中间件、响应结构
//! - `infrastructure`：日志初始化和内存存储

pub mod app;
pub mod core;
pub mod infrastructure;

use axum::Router;

use crate::app::{create_router, AppState};
use crate::core::config::Config;
use crate::core::middleware::ApiKey;
use crate::infrastructure::store::ProductStore;

/// 使用种子数据和给定配置构建完整应用
pub fn build_app(config: &Config) -> Router {
    create_router(
        AppState::new(ProductStore::seeded()),
        ApiKey::new(config.auth.api_key.clone()),
    )
}
