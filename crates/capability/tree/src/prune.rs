//! 空分支剪枝。

use domain::TreeNode;

/// 自底向上剪掉没有子节点的容器节点（位置、文件夹、网关、楼宇、楼层）。
///
/// 子节点先于父节点处理，父节点因子节点被剪空时也会被剪掉，单次遍历即可完成级联。
pub fn prune_empty(nodes: Vec<TreeNode>) -> Vec<TreeNode> {
    nodes.into_iter().filter_map(prune_node).collect()
}

fn prune_node(mut node: TreeNode) -> Option<TreeNode> {
    if node.is_meter() {
        return Some(node);
    }
    node.children = prune_empty(std::mem::take(&mut node.children));
    if node.children.is_empty() {
        None
    } else {
        Some(node)
    }
}
