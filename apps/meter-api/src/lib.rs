//! 计量树 HTTP API
//!
//! 以 `TreeStore` 为唯一状态，对外提供三棵树的读取、刷新与节点电表选择。
//! 所有路由同时挂载在 `/` 与 `/api` 下。

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod utils;

use axum::Router;
use meter_store::TreeStore;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 应用共享状态。
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TreeStore>,
}

/// 组装完整应用路由（含请求上下文中间件）。
pub fn create_app(state: AppState) -> Router {
    let api = routes::create_api_router();
    Router::new()
        .merge(api.clone())
        .nest("/api", api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // 注入 request_id/trace_id
        .layer(axum::middleware::from_fn(middleware::request_context))
}
