use super::super::node::{Entry, Node};
use super::super::rtree::RTree;

/// R-tree工具函数实现
impl RTree {
    /// 向上调整树 - 更新MBR
    ///
    /// 从给定路径末端的节点开始逐层向上：刷新节点自身的MBR，
    /// 并把它精确回写到父节点对应条目的矩形中，最后刷新根节点。
    /// 整棵树的外包矩形缓存在根节点的MBR里，所以根节点必须参与刷新
    pub(crate) fn adjust_tree_upward(&mut self, mut path: Vec<usize>) {
        while let Some(child_index) = path.pop() {
            // AT3: 刷新子节点自身的MBR
            let child_mbr = {
                let mut child_path = path.clone();
                child_path.push(child_index);
                let node = self
                    .get_last_node_mut(&child_path)
                    .expect("stale path during MBR propagation");
                node.update_mbr();
                node.mbr
            };

            // 回写到父节点对应槽位
            let parent = self
                .get_last_node_mut(&path)
                .expect("stale path during MBR propagation");
            match parent.entries.get_mut(child_index) {
                Some(entry) => *entry.mbr_mut() = child_mbr,
                None => panic!("parent slot lookup failed during MBR propagation"),
            }

            // AT5: 继续向上传播
        }

        if let Some(root) = self.root_mut().as_mut() {
            root.update_mbr();
        }
    }

    /// 获取路径中最后一个节点的可变引用
    ///
    /// 根据给定的路径从根节点开始遍历，返回路径末端节点的可变引用
    pub(crate) fn get_last_node_mut(&mut self, path: &[usize]) -> Option<&mut Node> {
        let mut current = self.root_mut().as_mut()?;

        for &index in path {
            if let Some(Entry::Node { node, .. }) = current.entries.get_mut(index) {
                current = node;
            } else {
                return None;
            }
        }

        Some(current)
    }
}
