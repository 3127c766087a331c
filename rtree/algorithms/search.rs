use super::super::node::{Entry, Node};
use super::super::object::PointObject;
use super::super::rectangle::{euclidean_distance, Rectangle};
use super::super::rtree::RTree;

/// 搜索操作相关算法
impl RTree {
    /// 半径查询：返回到 (x, y) 的欧氏距离不超过 radius 的全部对象
    ///
    /// 查询矩形取半径的外接正方形，只用于索引节点的剪枝；
    /// 叶子层按到圆心的距离过滤，而不是按矩形包含关系
    pub fn search_radius(&self, x: i32, y: i32, radius: f64) -> Vec<PointObject> {
        let mut results = Vec::new();
        if radius < 0.0 {
            return results;
        }

        if let Some(root) = self.root_ref() {
            let query = circumscribing_rect(x, y, radius);
            Self::search_recursive(root, &query, x, y, radius, &mut results);
        }

        results
    }

    /// 递归搜索 - 遵循论文Search算法
    fn search_recursive(
        node: &Node,
        query: &Rectangle,
        x: i32,
        y: i32,
        radius: f64,
        results: &mut Vec<PointObject>,
    ) {
        for entry in &node.entries {
            match entry {
                Entry::Object { object, .. } => {
                    // S2: 叶子层逐个对象判距离
                    if euclidean_distance(x, y, object.x, object.y) <= radius {
                        results.push(object.clone());
                    }
                }
                Entry::Node { mbr, node } => {
                    // S1: 只下降到与查询矩形相交的子树
                    if mbr.intersects(query) {
                        Self::search_recursive(node, query, x, y, radius, results);
                    }
                }
            }
        }
    }
}

/// 以 (x, y) 为圆心、radius 为半径的圆的外接正方形，坐标越界时收敛到 i32 范围
fn circumscribing_rect(x: i32, y: i32, radius: f64) -> Rectangle {
    let r = radius.ceil() as i64;
    let clamp = |v: i64| v.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
    Rectangle::new(
        clamp(x as i64 - r),
        clamp(y as i64 - r),
        clamp(x as i64 + r),
        clamp(y as i64 + r),
    )
}
