//! 系统树：位置 → 子位置 / 网关 → 电表。

use crate::index::MeterIndex;
use crate::location_node;
use domain::{Location, LogNet, LogNetDetail, Meter, NodeDetail, TreeNode};

/// 构建系统树（不按启用状态过滤）。
pub fn build_system_tree(
    locations: &[Location],
    lognets: &[LogNet],
    meters: &[Meter],
) -> Vec<TreeNode> {
    let index = MeterIndex::new(meters);
    system_tree(locations, lognets, &index)
}

pub(crate) fn system_tree(
    locations: &[Location],
    lognets: &[LogNet],
    index: &MeterIndex<'_>,
) -> Vec<TreeNode> {
    system_level(locations, lognets, index, None)
}

fn system_level(
    locations: &[Location],
    lognets: &[LogNet],
    index: &MeterIndex<'_>,
    parent_id: Option<i64>,
) -> Vec<TreeNode> {
    locations
        .iter()
        .filter(|location| location.parent_id == parent_id)
        .map(|location| {
            let mut children = system_level(locations, lognets, index, Some(location.id));
            children.extend(
                lognets
                    .iter()
                    .filter(|lognet| lognet.belongs_to(location.id))
                    .map(|lognet| lognet_node(lognet, index)),
            );
            location_node(location, children)
        })
        .collect()
}

fn lognet_node(lognet: &LogNet, index: &MeterIndex<'_>) -> TreeNode {
    let children = index
        .under_lognet(lognet.id)
        .iter()
        .map(|meter| TreeNode::meter(meter))
        .collect();
    TreeNode::new(
        lognet.id,
        lognet.name.clone(),
        NodeDetail::LogNet(LogNetDetail::from(lognet)),
        children,
    )
}
