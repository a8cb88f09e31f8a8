use anyhow::Context;
use product_api::{build_app, core::config::Config, infrastructure::logger::init_logging};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("加载配置失败")?;

    // guard 需要一直持有到进程退出
    let _log_guard = init_logging(&config.logging)?;

    if config.auth.api_key.is_none() {
        warn!("API_KEY 未设置，所有写操作都会返回 401");
    }

    let app = build_app(&config);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 Server is running on http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /                      - 欢迎信息");
    info!("   GET    /api/products          - 产品列表 (category, page, limit)");
    info!("   GET    /api/products/search   - 按名称搜索 (name)");
    info!("   GET    /api/products/stats    - 产品统计");
    info!("   GET    /api/products/:id      - 获取产品");
    info!("   POST   /api/products          - 创建产品 (需要 x-api-key)");
    info!("   PUT    /api/products/:id      - 更新产品 (需要 x-api-key)");
    info!("   DELETE /api/products/:id      - 删除产品 (需要 x-api-key)");

    axum::serve(listener, app).await.context("服务器运行失败")?;

    Ok(())
}
