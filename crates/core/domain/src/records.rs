//! 目录平铺记录。
//!
//! 由计量目录（后端 REST）返回的五类平铺记录，字段与后端保持一致（snake_case）。
//! 记录只读：树构建过程不修改任何输入。

use serde::{Deserialize, Deserializer, Serialize};

/// 位置记录（可自引用形成位置树，也可挂在楼层内）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
    pub location_floor_id: Option<i64>,
}

impl Location {
    /// 无父位置且不挂在楼层内时为顶层位置，否则作为文件夹渲染。
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none() && self.location_floor_id.is_none()
    }
}

/// 网关（数据采集器）记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogNet {
    pub id: i64,
    pub name: String,
    pub location_id: i64,
    pub sublocation_id: Option<i64>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub firmware_version: Option<String>,
    pub ip_address: Option<String>,
    pub subnet_mask: Option<String>,
    pub gateway: Option<String>,
    pub dns: Option<String>,
}

impl LogNet {
    /// 网关归属判定：直接挂在位置上（无子位置），或显式指定子位置。
    pub fn belongs_to(&self, location_id: i64) -> bool {
        match self.sublocation_id {
            Some(sublocation_id) => sublocation_id == location_id,
            None => self.location_id == location_id,
        }
    }
}

/// 楼宇记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: i64,
    pub name: String,
    pub location_id: i64,
}

/// 楼层记录（building_id 为空表示独立楼层）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub id: i64,
    pub name: String,
    pub building_id: Option<i64>,
}

impl Floor {
    pub fn is_standalone(&self) -> bool {
        self.building_id.is_none()
    }
}

/// 电表记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meter {
    pub id: i64,
    pub name: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub meter_sn: Option<String>,
    pub protocol: Option<String>,
    pub ip_address: Option<String>,
    pub port: Option<i64>,
    pub budrate: Option<i64>,
    pub ct_primary: Option<f64>,
    pub ct_secondary: Option<f64>,
    pub pt_primary: Option<f64>,
    pub pt_secondary: Option<f64>,
    pub slave_id: Option<i64>,
    pub lognet_id: Option<i64>,
    pub floor_id: Option<i64>,
    #[serde(default, deserialize_with = "flag")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "flag")]
    pub is_disabled_in_building: bool,
}

impl Meter {
    /// 在线树只展示已启用且未在楼宇中禁用的电表。
    pub fn is_online(&self) -> bool {
        self.is_active && !self.is_disabled_in_building
    }
}

/// 五类记录的完整快照。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordSet {
    pub locations: Vec<Location>,
    pub lognets: Vec<LogNet>,
    pub buildings: Vec<Building>,
    pub floors: Vec<Floor>,
    pub meters: Vec<Meter>,
}

/// 后端的布尔字段可能是 true/false，也可能是 0/1 或 null。
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(value)) => value,
        Some(Flag::Int(value)) => value != 0,
        None => false,
    })
}
