use super::node::{Entry, Node, NodeType};
use super::rectangle::Rectangle;
use serde::{Deserialize, Serialize};

/// 用于JSON序列化的简化树结构
///
/// 渲染方只消费这个只读视图，核心不依赖任何渲染资源
#[derive(Debug, Serialize, Deserialize)]
pub struct TreeVisualization {
    /// 根节点（如果存在）
    pub root: Option<NodeVisualization>,
    /// 树的配置参数
    pub config: TreeConfig,
}

/// 用于JSON序列化的树配置
#[derive(Debug, Serialize, Deserialize)]
pub struct TreeConfig {
    pub max_entries: usize,
    pub min_entries: usize,
    pub height: usize,
}

/// 用于JSON序列化的节点结构
#[derive(Debug, Serialize, Deserialize)]
pub struct NodeVisualization {
    /// 节点的最小边界矩形
    pub mbr: Rectangle,
    /// 节点类型
    pub node_type: NodeType,
    /// 节点层级
    pub level: usize,
    /// 对象条目（仅叶子节点）
    pub objects: Vec<ObjectEntry>,
    /// 子节点（仅索引节点）
    pub child_nodes: Vec<NodeVisualization>,
}

/// 用于JSON序列化的对象条目
#[derive(Debug, Serialize, Deserialize)]
pub struct ObjectEntry {
    pub mbr: Rectangle,
    pub x: i32,
    pub y: i32,
    pub label: String,
}

/// R-tree主结构
///
/// 整棵树的外包矩形缓存在根节点的 mbr 中，高度由根节点的层级给出
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RTree {
    /// 根节点，空树时为 None
    root: Option<Box<Node>>,
    /// 最大条目数M
    max_entries: usize,
    /// 最小条目数m（M/2）
    min_entries: usize,
    /// 下一个插入序号，对象身份由它决定
    next_seq: u64,
}

impl Default for RTree {
    /// 使用默认参数创建R-tree（M=4, m=2）
    fn default() -> Self {
        Self::new(4)
    }
}

impl RTree {
    /// 创建新的R-tree
    pub fn new(max_entries: usize) -> Self {
        assert!(max_entries >= 2, "Max entries must be at least 2");
        let min_entries = max_entries / 2;

        RTree {
            root: None,
            max_entries,
            min_entries,
            next_seq: 0,
        }
    }

    /// 检查R-tree是否为空
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// 整棵树的外包矩形（根节点MBR），空树时为 None
    pub fn bounds(&self) -> Option<&Rectangle> {
        self.root.as_ref().map(|node| &node.mbr)
    }

    /// 获取树的高度：根节点是叶子时为0，每次根分裂加1
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |node| node.level)
    }

    /// 获取最大条目数
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// 获取最小条目数
    pub fn min_entries(&self) -> usize {
        self.min_entries
    }

    /// 获取存储的对象总数
    pub fn len(&self) -> usize {
        self.root
            .as_ref()
            .map_or(0, |node| Self::count_objects(node))
    }

    /// 根节点的只读访问，供渲染方和诊断遍历使用
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// 统计子树中的对象数量
    fn count_objects(node: &Node) -> usize {
        node.entries
            .iter()
            .map(|entry| match entry {
                Entry::Node { node, .. } => Self::count_objects(node),
                Entry::Object { .. } => 1,
            })
            .sum()
    }

    /// 内部方法：获取根节点的可变引用
    pub(crate) fn root_mut(&mut self) -> &mut Option<Box<Node>> {
        &mut self.root
    }

    /// 内部方法：获取根节点的引用
    pub(crate) fn root_ref(&self) -> &Option<Box<Node>> {
        &self.root
    }

    /// 内部方法：获取最大条目数
    pub(crate) fn max_entries_internal(&self) -> usize {
        self.max_entries
    }

    /// 内部方法：获取最小条目数
    pub(crate) fn min_entries_internal(&self) -> usize {
        self.min_entries
    }

    /// 内部方法：分配下一个插入序号
    pub(crate) fn alloc_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// 导出树结构为JSON格式
    ///
    /// 返回包含完整树结构的JSON字符串，供外部渲染使用
    pub fn export_to_json(&self) -> Result<String, serde_json::Error> {
        let visualization = self.create_tree_visualization();
        serde_json::to_string_pretty(&visualization)
    }

    /// 创建用于可视化的树结构
    pub fn create_tree_visualization(&self) -> TreeVisualization {
        TreeVisualization {
            root: self
                .root
                .as_ref()
                .map(|node| Self::create_node_visualization(node)),
            config: TreeConfig {
                max_entries: self.max_entries,
                min_entries: self.min_entries,
                height: self.height(),
            },
        }
    }

    /// 递归创建节点的可视化结构
    fn create_node_visualization(node: &Node) -> NodeVisualization {
        let mut objects = Vec::new();
        let mut child_nodes = Vec::new();

        for entry in &node.entries {
            match entry {
                Entry::Object { mbr, object, .. } => {
                    objects.push(ObjectEntry {
                        mbr: *mbr,
                        x: object.x,
                        y: object.y,
                        label: object.label.clone(),
                    });
                }
                Entry::Node {
                    node: child_node, ..
                } => {
                    child_nodes.push(Self::create_node_visualization(child_node));
                }
            }
        }

        NodeVisualization {
            mbr: node.mbr,
            node_type: node.node_type.clone(),
            level: node.level,
            objects,
            child_nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rtree::object::PointObject;

    fn obj(x: i32, y: i32, label: &str) -> PointObject {
        PointObject::new(x, y, label).unwrap()
    }

    #[test]
    fn test_rtree_creation() {
        let rtree = RTree::new(4);
        assert_eq!(rtree.max_entries(), 4);
        assert_eq!(rtree.min_entries(), 2);
        assert!(rtree.is_empty());
        assert_eq!(rtree.height(), 0);
        assert!(rtree.bounds().is_none());
    }

    #[test]
    fn test_rtree_insert_single() {
        let mut rtree = RTree::default();
        rtree.insert(obj(3, 4, "one"));

        assert!(!rtree.is_empty());
        assert_eq!(rtree.len(), 1);
        assert_eq!(rtree.height(), 0);
        assert_eq!(rtree.bounds(), Some(&Rectangle::from_point(3, 4)));
    }

    #[test]
    fn test_bounds_tracks_insertions() {
        let mut rtree = RTree::default();
        rtree.insert(obj(0, 0, "a"));
        rtree.insert(obj(10, -4, "b"));
        rtree.insert(obj(-3, 8, "c"));

        assert_eq!(rtree.bounds(), Some(&Rectangle::new(-3, -4, 10, 8)));
    }

    #[test]
    fn test_json_export_complex_tree() {
        let mut rtree = RTree::default();

        // 插入足够多的对象以产生多层树结构
        for i in 0..10 {
            rtree.insert(obj(i * 10, i * 5, &format!("p{}", i)));
        }

        let json = rtree.export_to_json().expect("Failed to export JSON");

        assert!(json.contains("\"max_entries\": 4"));
        assert!(json.contains("\"min_entries\": 2"));
        assert!(json.contains("p0"));
        assert!(json.contains("p9"));
    }

    #[test]
    fn test_visualization_counts_match() {
        let mut rtree = RTree::default();
        for i in 0..7 {
            rtree.insert(obj(i, i, "x"));
        }

        fn count(node: &NodeVisualization) -> usize {
            node.objects.len() + node.child_nodes.iter().map(count).sum::<usize>()
        }

        let viz = rtree.create_tree_visualization();
        assert_eq!(count(&viz.root.unwrap()), 7);
        assert_eq!(rtree.len(), 7);
    }
}
