//! 路径参数校验
//!
//! 失败返回 bad_request_error 响应，由 handler 直接返回。

use crate::utils::response::bad_request_error;
use axum::response::Response;
use domain::TreeKind;

/// 解析树类型（大小写不敏感）
pub fn parse_tree_kind(value: &str) -> Result<TreeKind, Response> {
    value
        .parse::<TreeKind>()
        .map_err(|err| bad_request_error(err.to_string()))
}
