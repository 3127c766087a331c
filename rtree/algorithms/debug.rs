use super::super::node::{Entry, Node};
use super::super::rtree::RTree;
use std::fmt::Write;

/// 诊断用的树结构导出
impl RTree {
    /// 先序遍历导出树结构文本
    ///
    /// 每行一个节点，缩进表示深度；叶子节点按条目顺序列出对象，
    /// 索引节点给出区域编号和边界矩形
    pub fn dump(&self) -> String {
        match self.root_ref() {
            Some(root) => {
                let mut out = String::new();
                let mut region = 1;
                Self::dump_node(root, 0, &mut region, &mut out);
                out
            }
            None => "(empty tree)\n".to_string(),
        }
    }

    fn dump_node(node: &Node, depth: usize, region: &mut usize, out: &mut String) {
        for _ in 0..depth {
            out.push_str("  ");
        }

        if node.is_leaf_node() {
            let objects = node
                .entries
                .iter()
                .filter_map(Entry::object)
                .map(|object| format!("[{}]", object))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "Leaf Node: {}", objects);
        } else {
            let _ = writeln!(
                out,
                "Index Node (Region {}): [({}, {}), ({}, {})]",
                region, node.mbr.min[0], node.mbr.min[1], node.mbr.max[0], node.mbr.max[1]
            );
            *region += 1;

            for entry in &node.entries {
                if let Some(child) = entry.child() {
                    Self::dump_node(child, depth + 1, region, out);
                }
            }
        }
    }
}
