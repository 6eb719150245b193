//! 稳定的 DTO 与 API 响应契约。
//!
//! - 下行：`ApiResponse<T>` 统一封装返回给看板前端的数据
//! - 上行：`parse_records` 把后端返回的列表（包在 `data` 里或直接是数组）规范化为类型化记录

use domain::TreeNode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// 上游列表响应解析错误。
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("upstream reported failure: {0}")]
    Upstream(String),
    #[error("unexpected response shape: {0}")]
    Shape(&'static str),
    #[error("invalid record: {0}")]
    Record(#[from] serde_json::Error),
}

/// 解析上游列表响应。
///
/// 接受以下形态并统一为 `Vec<T>`：
/// - 裸数组 `[...]`
/// - 封装 `{"data": [...]}`（含 `{"success": true, "data": [...]}`）
/// - 分页封装 `{"data": {"data": [...], ...}}`
/// - `null` 或 `{"data": null}` 视为空列表
///
/// `{"success": false, ...}` 返回 `EnvelopeError::Upstream`。
pub fn parse_records<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, EnvelopeError> {
    match body {
        Value::Null => Ok(Vec::new()),
        Value::Array(_) => Ok(serde_json::from_value(body)?),
        Value::Object(mut map) => {
            if map.get("success") == Some(&Value::Bool(false)) {
                let message = map
                    .get("error")
                    .and_then(|error| error.get("message"))
                    .and_then(Value::as_str)
                    .or_else(|| map.get("message").and_then(Value::as_str))
                    .unwrap_or("request failed")
                    .to_string();
                return Err(EnvelopeError::Upstream(message));
            }
            match map.remove("data") {
                Some(data @ (Value::Null | Value::Array(_) | Value::Object(_))) => {
                    parse_records(data)
                }
                Some(_) => Err(EnvelopeError::Shape("data is not a list")),
                None => Err(EnvelopeError::Shape("object without data")),
            }
        }
        _ => Err(EnvelopeError::Shape("expected list or object")),
    }
}

/// 三棵树的当前快照。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreesDto {
    pub system_nodes: Vec<TreeNode>,
    pub building_nodes: Vec<TreeNode>,
    pub online_nodes: Vec<TreeNode>,
    pub loading: bool,
}

/// 节点下的电表选择结果。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterSelectionDto {
    pub node_id: String,
    pub meter_ids: Vec<i64>,
}

/// 指标快照。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshotDto {
    pub fetch_success: u64,
    pub fetch_failure: u64,
    pub tree_builds: u64,
    pub refreshes: u64,
    pub build_latency_ms_total: u64,
    pub build_latency_ms_count: u64,
}
