//! 楼宇树与在线树：位置 → 子位置 / 楼宇 / 独立楼层 → 楼层 → 电表 / 楼层内位置。
//!
//! 独立楼层（building_id 为空）追加到递归中每一个位置的子节点末尾。

use crate::index::MeterIndex;
use crate::location_node;
use crate::prune::prune_empty;
use domain::{Building, Floor, Location, Meter, NodeDetail, TreeNode};

/// 楼层下电表的过滤规则。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MeterFilter {
    All,
    Online,
}

impl MeterFilter {
    fn accepts(&self, meter: &Meter) -> bool {
        match self {
            MeterFilter::All => true,
            MeterFilter::Online => meter.is_online(),
        }
    }
}

/// 构建楼宇树（不过滤、不剪枝）。
pub fn build_building_tree(
    locations: &[Location],
    buildings: &[Building],
    floors: &[Floor],
    meters: &[Meter],
) -> Vec<TreeNode> {
    let index = MeterIndex::new(meters);
    building_tree(locations, buildings, floors, &index)
}

/// 构建在线树：仅保留在线电表，并剪掉没有电表后代的分支。
pub fn build_online_tree(
    locations: &[Location],
    buildings: &[Building],
    floors: &[Floor],
    meters: &[Meter],
) -> Vec<TreeNode> {
    let index = MeterIndex::new(meters);
    online_tree(locations, buildings, floors, &index)
}

pub(crate) fn building_tree(
    locations: &[Location],
    buildings: &[Building],
    floors: &[Floor],
    index: &MeterIndex<'_>,
) -> Vec<TreeNode> {
    Layout {
        locations,
        buildings,
        floors,
        index,
        filter: MeterFilter::All,
    }
    .level(None)
}

pub(crate) fn online_tree(
    locations: &[Location],
    buildings: &[Building],
    floors: &[Floor],
    index: &MeterIndex<'_>,
) -> Vec<TreeNode> {
    let tree = Layout {
        locations,
        buildings,
        floors,
        index,
        filter: MeterFilter::Online,
    }
    .level(None);
    prune_empty(tree)
}

struct Layout<'r, 'a> {
    locations: &'r [Location],
    buildings: &'r [Building],
    floors: &'r [Floor],
    index: &'r MeterIndex<'a>,
    filter: MeterFilter,
}

impl Layout<'_, '_> {
    fn level(&self, parent_id: Option<i64>) -> Vec<TreeNode> {
        self.locations
            .iter()
            .filter(|location| location.parent_id == parent_id)
            .map(|location| {
                let mut children = self.level(Some(location.id));
                children.extend(
                    self.buildings
                        .iter()
                        .filter(|building| building.location_id == location.id)
                        .map(|building| self.building_node(building)),
                );
                children.extend(
                    self.floors
                        .iter()
                        .filter(|floor| floor.is_standalone())
                        .map(|floor| self.floor_node(floor)),
                );
                location_node(location, children)
            })
            .collect()
    }

    fn building_node(&self, building: &Building) -> TreeNode {
        let children = self
            .floors
            .iter()
            .filter(|floor| floor.building_id == Some(building.id))
            .map(|floor| self.floor_node(floor))
            .collect();
        TreeNode::new(
            building.id,
            building.name.clone(),
            NodeDetail::Building,
            children,
        )
    }

    fn floor_node(&self, floor: &Floor) -> TreeNode {
        let mut children: Vec<TreeNode> = self
            .index
            .on_floor(floor.id)
            .iter()
            .filter(|meter| self.filter.accepts(meter))
            .map(|meter| TreeNode::meter(meter))
            .collect();
        // 挂在楼层内的位置只作为空文件夹展示，不再向下展开
        children.extend(
            self.locations
                .iter()
                .filter(|location| location.location_floor_id == Some(floor.id))
                .map(|location| location_node(location, Vec::new())),
        );
        TreeNode::new(floor.id, floor.name.clone(), NodeDetail::Floor, children)
    }
}
