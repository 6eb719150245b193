//! 计量树服务入口。

use meter_api::{AppState, create_app};
use meter_config::{AppConfig, ConfigError};
use meter_directory::{HttpDirectory, HttpDirectoryConfig, InMemoryDirectory, MeterDirectory};
use meter_store::TreeStore;
use meter_telemetry::init_tracing;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    let directory = build_directory(&config)?;
    let store = Arc::new(TreeStore::new(directory));
    if config.load_on_start {
        // 首次加载在后台进行，期间 loading 为 true
        let store = store.clone();
        tokio::spawn(async move {
            store.load().await;
        });
    }

    let app = create_app(AppState { store });
    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    tracing::info!(addr = %config.http_addr, "meter api listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// 本地快照文件优先，否则连接后端 REST 目录。
fn build_directory(config: &AppConfig) -> Result<Arc<dyn MeterDirectory>, Box<dyn std::error::Error>> {
    if let Some(path) = &config.fixture_path {
        tracing::info!(path = %path, "using fixture directory");
        return Ok(Arc::new(InMemoryDirectory::from_json_file(path)?));
    }
    let base_url = config
        .backend_url
        .clone()
        .ok_or_else(|| ConfigError::Missing("METER_BACKEND_URL".to_string()))?;
    let directory = HttpDirectory::new(HttpDirectoryConfig {
        base_url,
        token: config.backend_token.clone(),
        timeout: Duration::from_secs(config.backend_timeout_seconds),
    })?;
    tracing::info!(base_url = %directory.base_url(), "using http directory");
    Ok(Arc::new(directory))
}
