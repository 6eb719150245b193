//! 目录 HTTP 实现
//!
//! 通过后端 REST 接口读取平铺记录：
//! - GET {base}/locations[?tree_type=system|building|online]
//! - GET {base}/lognets
//! - GET {base}/buildings
//! - GET {base}/floors
//! - GET {base}/meters
//!
//! 响应体交给 `api_contract::parse_records` 规范化（`data` 封装或裸数组）。
//! 不做重试；超时由客户端统一配置。

use crate::error::DirectoryError;
use crate::traits::{MeterDirectory, RecordKind};
use api_contract::parse_records;
use domain::{Building, Floor, Location, LogNet, Meter, TreeKind};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP 目录配置。
#[derive(Debug, Clone)]
pub struct HttpDirectoryConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

/// 基于后端 REST 的计量目录。
#[derive(Clone)]
pub struct HttpDirectory {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpDirectory {
    pub fn new(config: HttpDirectoryConfig) -> Result<Self, DirectoryError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        kind: RecordKind,
        tree_type: Option<TreeKind>,
    ) -> Result<Vec<T>, DirectoryError> {
        let url = format!("{}/{}", self.base_url, kind.as_str());
        let mut request = self.client.get(&url);
        if let Some(tree_type) = tree_type {
            request = request.query(&[("tree_type", tree_type.as_str())]);
        }
        if let Some(token) = self.token.as_deref() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status {
                path: kind.as_str().to_string(),
                status: status.as_u16(),
            });
        }
        let body: serde_json::Value = response.json().await?;
        let records = parse_records(body)?;
        tracing::debug!(kind = %kind, count = records.len(), "directory fetch completed");
        Ok(records)
    }
}

#[async_trait::async_trait]
impl MeterDirectory for HttpDirectory {
    async fn get_locations(
        &self,
        tree_type: Option<TreeKind>,
    ) -> Result<Vec<Location>, DirectoryError> {
        self.fetch(RecordKind::Locations, tree_type).await
    }

    async fn get_lognets(&self) -> Result<Vec<LogNet>, DirectoryError> {
        self.fetch(RecordKind::LogNets, None).await
    }

    async fn get_buildings(&self) -> Result<Vec<Building>, DirectoryError> {
        self.fetch(RecordKind::Buildings, None).await
    }

    async fn get_floors(&self) -> Result<Vec<Floor>, DirectoryError> {
        self.fetch(RecordKind::Floors, None).await
    }

    async fn get_meters(&self) -> Result<Vec<Meter>, DirectoryError> {
        self.fetch(RecordKind::Meters, None).await
    }
}
