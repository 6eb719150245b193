//! 计量树 handlers
//!
//! - GET /trees - 三棵树快照与 loading 标记
//! - GET /trees/{kind} - 指定树
//! - POST /trees/refresh - 重新加载三棵树
//! - POST /trees/{kind}/refresh - 只刷新指定树
//! - GET /trees/{kind}/nodes/{node_id}/meters - 节点下的电表 ID
//!
//! kind 取值 system / building / online，其他值返回 INVALID.REQUEST。

use crate::AppState;
use crate::utils::response::not_found_error;
use crate::utils::{parse_tree_kind, trees_to_dto};
use api_contract::{ApiResponse, MeterSelectionDto};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::find_node;

#[derive(serde::Deserialize)]
pub struct TreePath {
    kind: String,
}

#[derive(serde::Deserialize)]
pub struct NodePath {
    kind: String,
    node_id: String,
}

/// 三棵树快照
pub async fn get_trees(State(state): State<AppState>) -> Response {
    let dto = trees_to_dto(state.store.get_trees());
    (StatusCode::OK, Json(ApiResponse::success(dto))).into_response()
}

/// 指定树
pub async fn get_tree(State(state): State<AppState>, Path(path): Path<TreePath>) -> Response {
    let kind = match parse_tree_kind(&path.kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    let nodes = state.store.nodes(kind);
    (StatusCode::OK, Json(ApiResponse::success(nodes.as_slice()))).into_response()
}

/// 重新加载三棵树
pub async fn refresh_trees(State(state): State<AppState>) -> Response {
    let dto = trees_to_dto(state.store.load().await);
    (StatusCode::OK, Json(ApiResponse::success(dto))).into_response()
}

/// 只刷新指定树
pub async fn refresh_tree(State(state): State<AppState>, Path(path): Path<TreePath>) -> Response {
    let kind = match parse_tree_kind(&path.kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    let nodes = state.store.refresh(kind).await;
    (StatusCode::OK, Json(ApiResponse::success(nodes.as_slice()))).into_response()
}

/// 节点子树内的全部电表 ID
pub async fn get_node_meters(
    State(state): State<AppState>,
    Path(path): Path<NodePath>,
) -> Response {
    let kind = match parse_tree_kind(&path.kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };
    let nodes = state.store.nodes(kind);
    let Some(node) = find_node(&nodes, &path.node_id) else {
        return not_found_error();
    };
    let dto = MeterSelectionDto {
        node_id: node.id.clone(),
        meter_ids: node.meter_ids(),
    };
    (StatusCode::OK, Json(ApiResponse::success(dto))).into_response()
}
