//! 树节点模型。
//!
//! 三种树（系统树、楼宇树、在线树）共用同一节点结构：
//! 合成 ID（`<kind>-<原始ID>`）、显示名、类型标签、有序子节点，以及按类型区分的属性。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::records::{LogNet, Meter};

/// 树类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeKind {
    System,
    Building,
    Online,
}

impl TreeKind {
    pub const ALL: [TreeKind; 3] = [TreeKind::System, TreeKind::Building, TreeKind::Online];

    pub fn as_str(&self) -> &'static str {
        match self {
            TreeKind::System => "system",
            TreeKind::Building => "building",
            TreeKind::Online => "online",
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 未知树类型。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTreeKind(pub String);

impl fmt::Display for UnknownTreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tree kind: {}", self.0)
    }
}

impl std::error::Error for UnknownTreeKind {}

impl FromStr for TreeKind {
    type Err = UnknownTreeKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(TreeKind::System),
            "building" => Ok(TreeKind::Building),
            "online" => Ok(TreeKind::Online),
            _ => Err(UnknownTreeKind(value.to_string())),
        }
    }
}

/// 节点类型标签。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Location,
    Folder,
    LogNet,
    Building,
    Floor,
    Meter,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Location => "location",
            NodeKind::Folder => "folder",
            NodeKind::LogNet => "lognet",
            NodeKind::Building => "building",
            NodeKind::Floor => "floor",
            NodeKind::Meter => "meter",
        }
    }

    /// 合成节点 ID：`<kind>-<原始ID>`。
    pub fn node_id(&self, original_id: i64) -> String {
        format!("{}-{}", self.as_str(), original_id)
    }
}

/// 网关节点属性。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogNetDetail {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub firmware_version: Option<String>,
    pub ip_address: Option<String>,
    pub subnet_mask: Option<String>,
    pub gateway: Option<String>,
    pub dns: Option<String>,
}

impl From<&LogNet> for LogNetDetail {
    fn from(lognet: &LogNet) -> Self {
        Self {
            brand: lognet.brand.clone(),
            model: lognet.model.clone(),
            serial_number: lognet.serial_number.clone(),
            firmware_version: lognet.firmware_version.clone(),
            ip_address: lognet.ip_address.clone(),
            subnet_mask: lognet.subnet_mask.clone(),
            gateway: lognet.gateway.clone(),
            dns: lognet.dns.clone(),
        }
    }
}

/// 电表节点属性。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterDetail {
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
    pub is_active: bool,
    pub is_disabled_in_building: bool,
}

impl From<&Meter> for MeterDetail {
    fn from(meter: &Meter) -> Self {
        Self {
            brand: meter.brand.clone(),
            model: meter.model.clone(),
            meter_sn: meter.meter_sn.clone(),
            protocol: meter.protocol.clone(),
            ip_address: meter.ip_address.clone(),
            port: meter.port,
            budrate: meter.budrate,
            ct_primary: meter.ct_primary,
            ct_secondary: meter.ct_secondary,
            pt_primary: meter.pt_primary,
            pt_secondary: meter.pt_secondary,
            slave_id: meter.slave_id,
            is_active: meter.is_active,
            is_disabled_in_building: meter.is_disabled_in_building,
        }
    }
}

/// 按类型区分的节点内容，序列化为 `"type": "<kind>"` 标签。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeDetail {
    Location,
    Folder,
    #[serde(rename = "lognet")]
    LogNet(LogNetDetail),
    Building,
    Floor,
    Meter(MeterDetail),
}

impl NodeDetail {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeDetail::Location => NodeKind::Location,
            NodeDetail::Folder => NodeKind::Folder,
            NodeDetail::LogNet(_) => NodeKind::LogNet,
            NodeDetail::Building => NodeKind::Building,
            NodeDetail::Floor => NodeKind::Floor,
            NodeDetail::Meter(_) => NodeKind::Meter,
        }
    }
}

/// 树节点。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub id: String,
    pub original_id: i64,
    pub name: String,
    #[serde(flatten)]
    pub detail: NodeDetail,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// 按类型构造节点，ID 由类型与原始 ID 合成。
    pub fn new(
        original_id: i64,
        name: impl Into<String>,
        detail: NodeDetail,
        children: Vec<TreeNode>,
    ) -> Self {
        Self {
            id: detail.kind().node_id(original_id),
            original_id,
            name: name.into(),
            detail,
            children,
        }
    }

    /// 电表叶子节点。
    pub fn meter(meter: &Meter) -> Self {
        Self::new(
            meter.id,
            meter.name.clone(),
            NodeDetail::Meter(MeterDetail::from(meter)),
            Vec::new(),
        )
    }

    pub fn kind(&self) -> NodeKind {
        self.detail.kind()
    }

    pub fn is_meter(&self) -> bool {
        self.kind() == NodeKind::Meter
    }

    /// 深度优先查找合成 ID（包含自身）。
    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// 子树内全部电表的原始 ID，按树内顺序。
    pub fn meter_ids(&self) -> Vec<i64> {
        let mut ids = Vec::new();
        self.collect_meter_ids(&mut ids);
        ids
    }

    fn collect_meter_ids(&self, ids: &mut Vec<i64>) {
        if self.is_meter() {
            ids.push(self.original_id);
        }
        for child in &self.children {
            child.collect_meter_ids(ids);
        }
    }
}

/// 在森林中按合成 ID 查找节点。
pub fn find_node<'a>(nodes: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
    nodes.iter().find_map(|node| node.find(id))
}
