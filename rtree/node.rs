use super::object::PointObject;
use super::rectangle::Rectangle;
use serde::{Deserialize, Serialize};

/// R-tree节点类型
///
/// 用于明确区分R-tree中的两种节点类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeType {
    /// 叶子节点：存储用户插入的点对象
    Leaf,
    /// 索引节点：存储指向子节点的引用条目
    Index,
}

/// R-tree节点条目
///
/// 每个条目都包含一个MBR（最小边界矩形）和对应的内容：
/// - Object条目：点对象及其退化的点矩形，只出现在叶子节点中
/// - Node条目：子节点引用及其MBR，只出现在索引节点中
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Entry {
    /// 对象条目
    ///
    /// seq 是插入时由树分配的递增序号，充当对象身份，
    /// 坐标和标签相同的两次插入也是两个不同的对象
    Object {
        mbr: Rectangle,
        seq: u64,
        object: PointObject,
    },

    /// 节点条目：mbr 必须精确等于子节点当前全部条目的MBR
    Node { mbr: Rectangle, node: Box<Node> },
}

impl Entry {
    /// 获取条目的MBR
    pub fn mbr(&self) -> &Rectangle {
        match self {
            Entry::Object { mbr, .. } => mbr,
            Entry::Node { mbr, .. } => mbr,
        }
    }

    /// 获取条目的MBR（可变引用），用于分裂后回写父节点槽位
    pub fn mbr_mut(&mut self) -> &mut Rectangle {
        match self {
            Entry::Object { mbr, .. } => mbr,
            Entry::Node { mbr, .. } => mbr,
        }
    }

    /// 检查是否为对象条目
    pub fn is_object(&self) -> bool {
        matches!(self, Entry::Object { .. })
    }

    /// 获取对象条目的对象引用
    pub fn object(&self) -> Option<&PointObject> {
        match self {
            Entry::Object { object, .. } => Some(object),
            Entry::Node { .. } => None,
        }
    }

    /// 获取对象条目的序号
    pub fn seq(&self) -> Option<u64> {
        match self {
            Entry::Object { seq, .. } => Some(*seq),
            Entry::Node { .. } => None,
        }
    }

    /// 获取节点条目的子节点引用
    pub fn child(&self) -> Option<&Node> {
        match self {
            Entry::Object { .. } => None,
            Entry::Node { node, .. } => Some(node),
        }
    }

    /// 获取节点条目的子节点引用（可变）
    pub fn child_mut(&mut self) -> Option<&mut Node> {
        match self {
            Entry::Object { .. } => None,
            Entry::Node { node, .. } => Some(node),
        }
    }
}

/// R-tree节点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// 节点的最小边界矩形，缓存自当前全部条目
    pub mbr: Rectangle,

    /// 节点包含的条目列表
    ///
    /// 叶子节点只包含Entry::Object条目，索引节点只包含Entry::Node条目
    pub entries: Vec<Entry>,

    /// 节点类型
    pub node_type: NodeType,

    /// 节点在树中的层级：叶子层为0，根节点层级最高
    pub level: usize,
}

impl Node {
    /// 创建新的叶子节点，层级固定为0
    pub fn new_leaf_node() -> Self {
        Node {
            mbr: Rectangle::new(0, 0, 0, 0),
            entries: Vec::new(),
            node_type: NodeType::Leaf,
            level: 0,
        }
    }

    /// 创建新的索引节点
    ///
    /// # 参数
    /// * `level` - 节点在树中的层级，必须 > 0
    pub fn new_index_node(level: usize) -> Self {
        Node {
            mbr: Rectangle::new(0, 0, 0, 0),
            entries: Vec::new(),
            node_type: NodeType::Index,
            level,
        }
    }

    /// 创建指定类型和层级的节点
    pub fn new(node_type: NodeType, level: usize) -> Self {
        Node {
            mbr: Rectangle::new(0, 0, 0, 0),
            entries: Vec::new(),
            node_type,
            level,
        }
    }

    /// 检查是否为叶子节点
    pub fn is_leaf_node(&self) -> bool {
        matches!(self.node_type, NodeType::Leaf)
    }

    /// 检查是否为索引节点
    pub fn is_index_node(&self) -> bool {
        matches!(self.node_type, NodeType::Index)
    }

    /// 更新节点的MBR以精确包含所有条目
    pub fn update_mbr(&mut self) {
        if self.entries.is_empty() {
            self.mbr = Rectangle::new(0, 0, 0, 0);
            return;
        }

        let mut mbr = *self.entries[0].mbr();
        for entry in &self.entries[1..] {
            mbr = mbr.union(entry.mbr());
        }
        self.mbr = mbr;
    }

    /// 添加条目到节点，并同步刷新节点的MBR
    ///
    /// # 注意
    /// 调用者需要确保条目类型与节点类型匹配：
    /// - 叶子节点只能添加Entry::Object条目
    /// - 索引节点只能添加Entry::Node条目
    pub fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
        self.update_mbr();
    }

    /// 检查节点是否已满
    pub fn is_full(&self, max_entries: usize) -> bool {
        self.entries.len() >= max_entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rtree::object::PointObject;

    fn object_entry(x: i32, y: i32, seq: u64, label: &str) -> Entry {
        let object = PointObject::new(x, y, label).unwrap();
        Entry::Object {
            mbr: object.rect(),
            seq,
            object,
        }
    }

    #[test]
    fn test_node_creation() {
        let leaf_node = Node::new_leaf_node();
        assert!(leaf_node.is_leaf_node());
        assert!(!leaf_node.is_index_node());
        assert_eq!(leaf_node.level, 0);
        assert_eq!(leaf_node.node_type, NodeType::Leaf);

        let index_node = Node::new_index_node(1);
        assert!(!index_node.is_leaf_node());
        assert!(index_node.is_index_node());
        assert_eq!(index_node.level, 1);
        assert_eq!(index_node.node_type, NodeType::Index);
    }

    #[test]
    fn test_node_update_mbr() {
        let mut node = Node::new_leaf_node();

        node.add_entry(object_entry(0, 0, 1, "a"));
        node.add_entry(object_entry(8, 3, 2, "b"));

        assert_eq!(node.mbr, Rectangle::new(0, 0, 8, 3));

        node.add_entry(object_entry(-2, 9, 3, "c"));
        assert_eq!(node.mbr, Rectangle::new(-2, 0, 8, 9));
    }

    #[test]
    fn test_entry_operations() {
        let entry = object_entry(0, 0, 42, "answer");

        assert!(entry.is_object());
        assert_eq!(entry.seq(), Some(42));
        assert_eq!(entry.object().unwrap().label, "answer");
        assert_eq!(entry.mbr(), &Rectangle::from_point(0, 0));
        assert!(entry.child().is_none());

        let child_node = Box::new(Node::new_leaf_node());
        let node_entry = Entry::Node {
            mbr: Rectangle::new(1, 1, 6, 6),
            node: child_node,
        };

        assert!(!node_entry.is_object());
        assert_eq!(node_entry.seq(), None);
        assert_eq!(node_entry.mbr(), &Rectangle::new(1, 1, 6, 6));
        assert!(node_entry.child().is_some());
    }

    #[test]
    fn test_node_is_full() {
        let mut node = Node::new_leaf_node();
        for i in 0..4 {
            assert!(!node.is_full(4));
            node.add_entry(object_entry(i, i, i as u64, "p"));
        }
        assert!(node.is_full(4));
    }
}
