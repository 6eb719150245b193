//! 计量层级领域模型：平铺目录记录与树节点。

pub mod records;
pub mod tree;

pub use records::{Building, Floor, Location, LogNet, Meter, RecordSet};
pub use tree::{
    LogNetDetail, MeterDetail, NodeDetail, NodeKind, TreeKind, TreeNode, UnknownTreeKind,
    find_node,
};
