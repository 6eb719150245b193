//! 应用运行配置加载。

use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    /// 设备目录后端地址；使用本地快照文件时可为空。
    pub backend_url: Option<String>,
    pub backend_token: Option<String>,
    pub backend_timeout_seconds: u64,
    pub load_on_start: bool,
    /// 本地 JSON 快照文件，设置后替代 HTTP 后端。
    pub fixture_path: Option<String>,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let fixture_path = read_optional("METER_FIXTURE_PATH");
        let backend_url = read_optional("METER_BACKEND_URL");
        if backend_url.is_none() && fixture_path.is_none() {
            return Err(ConfigError::Missing("METER_BACKEND_URL".to_string()));
        }
        let http_addr =
            env::var("METER_HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let backend_token = read_optional("METER_BACKEND_TOKEN");
        let backend_timeout_seconds =
            read_u64_with_default("METER_BACKEND_TIMEOUT_SECONDS", 10)?;
        if backend_timeout_seconds == 0 {
            return Err(ConfigError::Invalid(
                "METER_BACKEND_TIMEOUT_SECONDS".to_string(),
                "0".to_string(),
            ));
        }
        let load_on_start = read_bool_with_default("METER_LOAD_ON_START", true);

        Ok(Self {
            http_addr,
            backend_url,
            backend_token,
            backend_timeout_seconds,
            load_on_start,
            fixture_path,
        })
    }
}

fn read_u64_with_default(key: &str, default: u64) -> Result<u64, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<u64>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

fn read_bool_with_default(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "on"),
        Err(_) => default,
    }
}
