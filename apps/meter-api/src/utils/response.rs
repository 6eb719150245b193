//! HTTP 响应辅助函数和 DTO 转换
//!
//! - 错误响应：bad_request_error, not_found_error
//! - DTO 转换：trees_to_dto
//!
//! 所有错误返回统一的 ApiResponse 格式，HTTP 状态码与错误码对应。

use api_contract::{ApiResponse, TreesDto};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use meter_store::TreeSnapshot;
use std::sync::Arc;

/// 错误请求响应
pub fn bad_request_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error("INVALID.REQUEST", message.into())),
    )
        .into_response()
}

/// 资源未找到错误响应
pub fn not_found_error() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error("RESOURCE.NOT_FOUND", "not found")),
    )
        .into_response()
}

/// TreeSnapshot 转 TreesDto
pub fn trees_to_dto(snapshot: TreeSnapshot) -> TreesDto {
    TreesDto {
        system_nodes: Arc::unwrap_or_clone(snapshot.system),
        building_nodes: Arc::unwrap_or_clone(snapshot.building),
        online_nodes: Arc::unwrap_or_clone(snapshot.online),
        loading: snapshot.loading,
    }
}
