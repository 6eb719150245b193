//! 计量目录接口
//!
//! 树构建所需的五类平铺记录的读取接口。实现负责把上游响应规范化为类型化记录，
//! 树构建只会看到统一、已校验的输入。

use crate::error::DirectoryError;
use async_trait::async_trait;
use domain::{Building, Floor, Location, LogNet, Meter, TreeKind};
use std::fmt;

/// 记录集合类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Locations,
    LogNets,
    Buildings,
    Floors,
    Meters,
}

impl RecordKind {
    pub const ALL: [RecordKind; 5] = [
        RecordKind::Locations,
        RecordKind::LogNets,
        RecordKind::Buildings,
        RecordKind::Floors,
        RecordKind::Meters,
    ];

    /// 上游资源路径。
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Locations => "locations",
            RecordKind::LogNets => "lognets",
            RecordKind::Buildings => "buildings",
            RecordKind::Floors => "floors",
            RecordKind::Meters => "meters",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 计量目录。
#[async_trait]
pub trait MeterDirectory: Send + Sync {
    /// 读取位置；`tree_type` 透传给上游用于按树类型筛选。
    async fn get_locations(
        &self,
        tree_type: Option<TreeKind>,
    ) -> Result<Vec<Location>, DirectoryError>;

    /// 读取网关
    async fn get_lognets(&self) -> Result<Vec<LogNet>, DirectoryError>;

    /// 读取楼宇
    async fn get_buildings(&self) -> Result<Vec<Building>, DirectoryError>;

    /// 读取楼层
    async fn get_floors(&self) -> Result<Vec<Floor>, DirectoryError>;

    /// 读取电表
    async fn get_meters(&self) -> Result<Vec<Meter>, DirectoryError>;
}
