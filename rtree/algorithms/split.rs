use super::super::node::{Entry, Node};
use super::super::rectangle::Rectangle;
use super::super::rtree::RTree;
use tracing::debug;

/// 节点分裂算法 - 实现完整的二次分裂(Quadratic Split)
impl RTree {
    /// 分裂溢出节点并向上传播
    ///
    /// path 指向当前持有 M+1 个条目的节点。分裂后原节点保留第一组，
    /// 新节点持有第二组；父节点满员时递归分裂，直到根节点。
    /// 根节点分裂会创建新的根，使整棵树长高一层。
    pub(crate) fn split_and_propagate(&mut self, mut path: Vec<usize>) {
        let max_entries = self.max_entries_internal();

        // 取出溢出节点的全部条目（M+1 个候选）
        let (entries, node_type, level) = {
            let node = self
                .get_last_node_mut(&path)
                .expect("split target vanished during propagation");
            assert!(
                node.entries.len() > max_entries,
                "split invoked on a node that is not over capacity"
            );
            let entries = std::mem::take(&mut node.entries);
            (entries, node.node_type.clone(), node.level)
        };

        // 执行二次分裂
        let (group1, group2) = self.quadratic_split(entries);
        debug!(
            level,
            group1 = group1.len(),
            group2 = group2.len(),
            "node split"
        );

        // 原节点保留第一组
        let node_mbr = {
            let node = self
                .get_last_node_mut(&path)
                .expect("split target vanished during propagation");
            node.entries = group1;
            node.update_mbr();
            node.mbr
        };

        // 新节点持有第二组
        let mut new_node = Node::new(node_type, level);
        new_node.entries = group2;
        new_node.update_mbr();
        let new_mbr = new_node.mbr;

        match path.pop() {
            // 分裂的是根节点：创建新根，两个分组成为它的子节点
            None => {
                let old_root = self
                    .root_mut()
                    .take()
                    .expect("root missing during root split");
                let mut new_root = Node::new_index_node(level + 1);
                new_root.add_entry(Entry::Node {
                    mbr: old_root.mbr,
                    node: old_root,
                });
                new_root.add_entry(Entry::Node {
                    mbr: new_mbr,
                    node: Box::new(new_node),
                });
                debug!(height = level + 1, "root split, tree grew");
                *self.root_mut() = Some(Box::new(new_root));
            }
            // 分裂的是非根节点：把两个分组接回父节点
            Some(child_index) => {
                let parent = self
                    .get_last_node_mut(&path)
                    .expect("parent vanished during split propagation");

                // 父节点中原条目的矩形必须立即改为第一组的精确MBR
                match parent.entries.get_mut(child_index) {
                    Some(entry) => *entry.mbr_mut() = node_mbr,
                    None => panic!("parent slot lookup failed during split propagation"),
                }
                parent.add_entry(Entry::Node {
                    mbr: new_mbr,
                    node: Box::new(new_node),
                });

                if parent.entries.len() > max_entries {
                    // 父节点也溢出，继续向上分裂
                    self.split_and_propagate(path);
                } else {
                    // 只需要向上修正MBR
                    self.adjust_tree_upward(path);
                }
            }
        }
    }

    /// 二次分裂算法 - 遵循论文Algorithm QuadraticSplit
    ///
    /// 把 M+1 个候选条目划分为两组，每组至少 m 个条目。
    /// 叶子分裂和索引节点分裂共用同一套逻辑，候选条目的种类不影响算法
    pub(crate) fn quadratic_split(&self, mut entries: Vec<Entry>) -> (Vec<Entry>, Vec<Entry>) {
        let min_entries = self.min_entries_internal();
        let total = entries.len();

        // QS1: 选择种子 - 找到组合起来最浪费空间的两个条目
        let (seed1, seed2) = Self::pick_seeds(&entries);
        // pick_seeds 保证 seed1 < seed2，先移除大下标不影响小下标
        let high = entries.swap_remove(seed2);
        let low = entries.swap_remove(seed1);
        let mut group1 = vec![low];
        let mut group2 = vec![high];

        while !entries.is_empty() {
            // QS2: 强制分配 - 某一组若不拿走全部剩余条目就无法达到最小填充 m
            let forced = if total - group2.len() == min_entries {
                Some(1)
            } else if total - group1.len() == min_entries {
                Some(2)
            } else {
                None
            };

            // QS3: 选择偏好最强的下一个条目
            let next_index = Self::pick_next(&entries, &group1, &group2)
                .expect("unassigned candidates remain");
            let entry = entries.swap_remove(next_index);

            let target = match forced {
                Some(group) => group,
                None => {
                    let bound1 = Self::group_mbr(&group1);
                    let bound2 = Self::group_mbr(&group2);

                    // QS3.2: 计算两组各自需要的扩大量
                    let d1 = bound1.enlargement(entry.mbr());
                    let d2 = bound2.enlargement(entry.mbr());

                    // QS3.3: 选择扩大量较小的组
                    if d1 != d2 {
                        if d1 < d2 {
                            1
                        } else {
                            2
                        }
                    } else {
                        // QS3.4: 扩大量相同则选择面积较小的组
                        let area1 = bound1.area();
                        let area2 = bound2.area();
                        if area1 != area2 {
                            if area1 < area2 {
                                1
                            } else {
                                2
                            }
                        } else if group1.len() <= group2.len() {
                            // QS3.5: 面积也相同则选择条目较少的组，完全平局取第一组
                            1
                        } else {
                            2
                        }
                    }
                }
            };

            if target == 1 {
                group1.push(entry);
            } else {
                group2.push(entry);
            }
        }

        (group1, group2)
    }

    /// PickSeeds算法 - 选择两个条目作为种子，使得它们组合后的死空间最大
    ///
    /// 对每一对条目计算 d = enlargement(r1, r2) - area(r2)，
    /// 即同组放置时浪费的面积；取 d 最大的一对。返回值保证下标升序
    pub(crate) fn pick_seeds(entries: &[Entry]) -> (usize, usize) {
        let mut max_waste = i64::MIN;
        let mut best_pair = (0, 1);

        // PS1: 遍历所有条目对
        for i in 0..entries.len() {
            for j in (i + 1)..entries.len() {
                let rect1 = entries[i].mbr();
                let rect2 = entries[j].mbr();

                let waste = rect1.enlargement(rect2) - rect2.area();

                // PS2: 选择浪费最大的一对
                if waste > max_waste {
                    max_waste = waste;
                    best_pair = (i, j);
                }
            }
        }

        best_pair
    }

    /// PickNext算法 - 选择下一个要分配的条目
    ///
    /// 对每个剩余条目计算加入两组的扩大量之差的绝对值，
    /// 取差值最大的条目（对某一组偏好最明显的那个）
    pub(crate) fn pick_next(
        remaining: &[Entry],
        group1: &[Entry],
        group2: &[Entry],
    ) -> Option<usize> {
        if remaining.is_empty() {
            return None;
        }

        let bound1 = Self::group_mbr(group1);
        let bound2 = Self::group_mbr(group2);

        let mut max_preference = -1;
        let mut best_entry = 0;

        for (i, entry) in remaining.iter().enumerate() {
            // PN1: 计算放入各组的扩大量之差
            let d1 = bound1.enlargement(entry.mbr());
            let d2 = bound2.enlargement(entry.mbr());
            let preference = (d1 - d2).abs();

            // PN2: 选择偏好差异最大的条目
            if preference > max_preference {
                max_preference = preference;
                best_entry = i;
            }
        }

        Some(best_entry)
    }

    /// 计算一组条目的最小边界矩形
    pub(crate) fn group_mbr(group: &[Entry]) -> Rectangle {
        let mut iter = group.iter();
        let first = iter.next().expect("group is never empty after seeding");
        let mut mbr = *first.mbr();
        for entry in iter {
            mbr = mbr.union(entry.mbr());
        }
        mbr
    }
}
