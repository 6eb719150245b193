//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers：
//! - 健康检查：/health
//! - 树读取：/trees, /trees/{kind}
//! - 树刷新：/trees/refresh, /trees/{kind}/refresh
//! - 节点电表：/trees/{kind}/nodes/{node_id}/meters
//! - 指标：/metrics

use super::AppState;
use super::handlers::*;
use axum::{
    Router,
    routing::{get, post},
};

/// 创建 API 路由
///
/// 返回包含所有 API 端点的 Router，由调用方挂载到 / 和 /api/ 两种前缀
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(get_metrics))
        .route("/trees", get(get_trees))
        .route("/trees/refresh", post(refresh_trees))
        .route("/trees/:kind", get(get_tree))
        .route("/trees/:kind/refresh", post(refresh_tree))
        .route("/trees/:kind/nodes/:node_id/meters", get(get_node_meters))
}
