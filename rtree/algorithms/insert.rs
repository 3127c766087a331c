use super::super::node::{Entry, Node};
use super::super::object::{ObjectError, PointObject};
use super::super::rectangle::Rectangle;
use super::super::rtree::RTree;

/// 插入操作相关算法
impl RTree {
    /// 插入新的点对象 - 遵循论文Algorithm Insert
    pub fn insert(&mut self, object: PointObject) {
        let rect = object.rect();
        let seq = self.alloc_seq();

        // I1: 如果根节点不存在，创建根叶子节点
        if self.root_ref().is_none() {
            let mut root = Node::new_leaf_node();
            root.add_entry(Entry::Object { mbr: rect, seq, object });
            *self.root_mut() = Some(Box::new(root));
            return;
        }

        // I2: 选择叶子节点
        let leaf_path = self.choose_leaf_path(&rect);

        // I3: 添加记录到叶子节点
        let max_entries = self.max_entries_internal();
        let leaf_node = match self.get_last_node_mut(&leaf_path) {
            Some(node) => node,
            None => {
                // 路径失效说明树结构被破坏，属于编程错误
                panic!("Failed to get leaf node during insertion");
            }
        };
        leaf_node.add_entry(Entry::Object { mbr: rect, seq, object });

        // I4: 叶子溢出则二次分裂并向上传播，否则只需向上修正MBR
        if leaf_node.entries.len() > max_entries {
            self.split_and_propagate(leaf_path);
        } else {
            self.adjust_tree_upward(leaf_path);
        }
    }

    /// 按坐标和标签插入，标签校验失败时不触碰树
    pub fn insert_point(&mut self, x: i32, y: i32, label: &str) -> Result<(), ObjectError> {
        let object = PointObject::new(x, y, label)?;
        self.insert(object);
        Ok(())
    }

    /// 选择叶子节点路径 - 遵循论文ChooseLeaf算法
    pub(crate) fn choose_leaf_path(&self, rect: &Rectangle) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = self.root_ref().as_ref().expect("choose_leaf on empty tree");

        // CL1: 从根节点开始
        // CL2: 叶子检查
        while !current.is_leaf_node() {
            // CL3: 选择子树 - 选择扩大面积最小的条目
            let best_index = Self::choose_subtree(&current.entries, rect);
            path.push(best_index);

            // CL4: 下降到子节点
            match current.entries.get(best_index) {
                Some(Entry::Node { node, .. }) => current = node,
                _ => panic!("Index node entry without child during descent"),
            }
        }

        path
    }

    /// 选择子树 - 计算扩大面积最小的条目
    ///
    /// 扩大量相同时取当前面积较小者，面积也相同时保留扫描中先出现的条目
    pub(crate) fn choose_subtree(entries: &[Entry], rect: &Rectangle) -> usize {
        let mut best_index = 0;
        let mut min_enlargement = i64::MAX;
        let mut min_area = i64::MAX;

        for (i, entry) in entries.iter().enumerate() {
            let mbr = entry.mbr();
            let enlargement = mbr.enlargement(rect);
            let area = mbr.area();

            if enlargement < min_enlargement
                || (enlargement == min_enlargement && area < min_area)
            {
                min_enlargement = enlargement;
                min_area = area;
                best_index = i;
            }
        }

        best_index
    }
}
