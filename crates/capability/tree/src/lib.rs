//! # 计量层级树构建
//!
//! 将目录返回的平铺记录（位置、网关、楼宇、楼层、电表）组装为三种嵌套树：
//!
//! - **系统树**：位置 → 子位置 / 网关 → 电表
//! - **楼宇树**：位置 → 子位置 / 楼宇 / 独立楼层 → 楼层 → 电表 / 楼层内位置
//! - **在线树**：楼宇树仅保留在线电表，并剪掉没有电表后代的分支
//!
//! 所有构建函数都是纯函数：不修改输入、不持有共享状态、不做 I/O。
//! 每次构建都生成全新的节点，三棵树之间不共享任何节点。
//!
//! 引用了不存在父记录的电表（例如 floor_id 指向不存在的楼层）不会出现在对应的树中。
//!
//! ```rust,ignore
//! use meter_tree::build_all;
//!
//! let forests = build_all(&records);
//! render(&forests.online);
//! ```

pub mod building;
pub mod index;
pub mod prune;
pub mod system;

pub use building::{build_building_tree, build_online_tree};
pub use index::{MeterIndex, sorted_meters};
pub use prune::prune_empty;
pub use system::build_system_tree;

use domain::{Location, NodeDetail, RecordSet, TreeKind, TreeNode};

/// 同一份记录快照构建出的三棵树。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forests {
    pub system: Vec<TreeNode>,
    pub building: Vec<TreeNode>,
    pub online: Vec<TreeNode>,
}

impl Forests {
    pub fn get(&self, kind: TreeKind) -> &[TreeNode] {
        match kind {
            TreeKind::System => &self.system,
            TreeKind::Building => &self.building,
            TreeKind::Online => &self.online,
        }
    }
}

/// 按树类型分别读取的位置列表（上游可按 tree_type 筛选位置）。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationSets {
    pub system: Vec<Location>,
    pub building: Vec<Location>,
    pub online: Vec<Location>,
}

impl LocationSets {
    pub fn get(&self, kind: TreeKind) -> &[Location] {
        match kind {
            TreeKind::System => &self.system,
            TreeKind::Building => &self.building,
            TreeKind::Online => &self.online,
        }
    }
}

/// 电表只排序、索引一次，然后用同一份位置列表构建三棵树。
pub fn build_all(records: &RecordSet) -> Forests {
    let locations = records.locations.as_slice();
    forests([locations; 3], records)
}

/// 与 `build_all` 相同，但每棵树使用各自的位置列表；`records.locations` 被忽略。
pub fn build_forests(locations: &LocationSets, records: &RecordSet) -> Forests {
    forests(
        [
            locations.system.as_slice(),
            locations.building.as_slice(),
            locations.online.as_slice(),
        ],
        records,
    )
}

fn forests(
    [system_locations, building_locations, online_locations]: [&[Location]; 3],
    records: &RecordSet,
) -> Forests {
    let index = MeterIndex::new(&records.meters);
    Forests {
        system: system::system_tree(system_locations, &records.lognets, &index),
        building: building::building_tree(
            building_locations,
            &records.buildings,
            &records.floors,
            &index,
        ),
        online: building::online_tree(
            online_locations,
            &records.buildings,
            &records.floors,
            &index,
        ),
    }
}

/// 按树类型构建单棵树。
pub fn build_tree(kind: TreeKind, records: &RecordSet) -> Vec<TreeNode> {
    match kind {
        TreeKind::System => build_system_tree(&records.locations, &records.lognets, &records.meters),
        TreeKind::Building => build_building_tree(
            &records.locations,
            &records.buildings,
            &records.floors,
            &records.meters,
        ),
        TreeKind::Online => build_online_tree(
            &records.locations,
            &records.buildings,
            &records.floors,
            &records.meters,
        ),
    }
}

/// 顶层位置渲染为 location，其余（有父位置或挂在楼层内）渲染为 folder。
pub(crate) fn location_node(location: &Location, children: Vec<TreeNode>) -> TreeNode {
    let detail = if location.is_top_level() {
        NodeDetail::Location
    } else {
        NodeDetail::Folder
    };
    TreeNode::new(location.id, location.name.clone(), detail, children)
}
