//! 目录错误类型
//!
//! 统一封装上游 HTTP、响应解析与本地存储错误。调用方（树存储）只需区分成功与失败。

use api_contract::EnvelopeError;

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("http error: {0}")]
    Http(String),
    #[error("unexpected status {status} from {path}")]
    Status { path: String, status: u16 },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for DirectoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

impl From<EnvelopeError> for DirectoryError {
    fn from(err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::Upstream(message) => Self::Unavailable(message),
            other => Self::Decode(other.to_string()),
        }
    }
}
