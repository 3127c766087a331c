//! 整树性质测试：填充率、平衡性、MBR 精确性、查询一致性
//!
//! 这些性质跨越插入、分裂和查询模块，放在集成测试里
//! 对公开的只读节点视图做整体检查

use planar::rtree::{Entry, Node, PointObject, Rectangle, RTree};

fn obj(x: i32, y: i32, label: &str) -> PointObject {
    PointObject::new(x, y, label).unwrap()
}

/// 递归检查三条结构不变量：
/// 1. 非根节点的条目数在 [m, M] 内，根节点不超过 M
/// 2. 所有叶子的层级为 0，索引节点的层级恰好比子节点高 1
/// 3. 每个索引条目的矩形精确等于子节点的MBR，节点MBR精确覆盖全部条目
fn check_node(node: &Node, is_root: bool, min_entries: usize, max_entries: usize) {
    assert!(node.entries.len() <= max_entries, "node over capacity");
    if !is_root {
        assert!(node.entries.len() >= min_entries, "node under-filled");
    }

    if node.is_leaf_node() {
        assert_eq!(node.level, 0, "leaf not at level 0");
    }

    let mut expected_mbr: Option<Rectangle> = None;
    for entry in &node.entries {
        let mbr = *entry.mbr();
        expected_mbr = Some(match expected_mbr {
            None => mbr,
            Some(acc) => acc.union(&mbr),
        });

        match entry {
            Entry::Object { mbr, object, .. } => {
                assert!(node.is_leaf_node(), "object entry in index node");
                assert_eq!(mbr, &object.rect(), "object entry rect is not its point");
            }
            Entry::Node { mbr, node: child } => {
                assert!(node.is_index_node(), "child entry in leaf node");
                assert_eq!(node.level, child.level + 1, "level gap between parent and child");
                assert_eq!(mbr, &child.mbr, "stored child rect differs from child MBR");
                check_node(child, false, min_entries, max_entries);
            }
        }
    }

    assert_eq!(
        Some(node.mbr),
        expected_mbr,
        "node MBR is not the exact union of its entries"
    );
}

fn check_tree(tree: &RTree) {
    if let Some(root) = tree.root() {
        assert_eq!(root.level, tree.height());
        check_node(root, true, tree.min_entries(), tree.max_entries());
    }
}

#[test]
fn invariants_hold_during_incremental_build() {
    let mut tree = RTree::default();

    // 每插入一个对象都完整检查一遍结构
    for i in 0..64 {
        let x = (i * 37) % 100;
        let y = (i * 53) % 100;
        tree.insert(obj(x, y, &format!("p{}", i)));

        check_tree(&tree);
        assert_eq!(tree.len(), (i + 1) as usize);
    }

    assert!(tree.height() >= 2, "64 objects with M=4 must stack levels");
}

#[test]
fn round_trip_returns_every_object() {
    let mut tree = RTree::default();
    let mut expected = Vec::new();

    for i in 0..50 {
        let label = format!("obj{}", i);
        tree.insert(obj((i * 19) % 83 - 40, (i * 7) % 61 - 30, &label));
        expected.push(label);
    }

    let mut found: Vec<String> = tree
        .search_radius(0, 0, 1e9)
        .into_iter()
        .map(|o| o.label)
        .collect();
    found.sort();
    expected.sort();
    assert_eq!(found, expected);
}

#[test]
fn fifth_insert_splits_the_root_leaf() {
    let mut tree = RTree::default();

    tree.insert(obj(0, 0, "a"));
    tree.insert(obj(10, 10, "b"));
    tree.insert(obj(0, 10, "c"));
    tree.insert(obj(10, 0, "d"));
    assert_eq!(tree.height(), 0);

    tree.insert(obj(5, 5, "e"));

    assert_eq!(tree.height(), 1);
    let root = tree.root().unwrap();
    assert_eq!(root.entries.len(), 2);
    check_tree(&tree);

    // 全部 5 个对象仍然可以通过范围查询取回
    let found = tree.search_radius(5, 5, 100.0);
    assert_eq!(found.len(), 5);
}

#[test]
fn nearest_neighbor_matches_linear_scan() {
    let mut tree = RTree::default();
    let mut points = Vec::new();

    for i in 0..45 {
        let x = (i * 31) % 97;
        let y = (i * 17) % 89;
        points.push((x, y));
        tree.insert(obj(x, y, &format!("p{}", i)));
    }

    for &(qx, qy) in &[(0, 0), (50, 50), (96, 88), (13, 70)] {
        let best = points
            .iter()
            .map(|&(x, y)| {
                let dx = (x - qx) as f64;
                let dy = (y - qy) as f64;
                (dx * dx + dy * dy).sqrt()
            })
            .fold(f64::INFINITY, f64::min);

        let (_, distance) = tree.nearest_neighbor(qx, qy).unwrap();
        assert_eq!(distance, best, "query ({}, {})", qx, qy);
    }
}

#[test]
fn knn_scenario_with_center_point() {
    let mut tree = RTree::default();
    tree.insert(obj(0, 0, "a"));
    tree.insert(obj(10, 10, "b"));
    tree.insert(obj(0, 10, "c"));
    tree.insert(obj(10, 0, "d"));
    tree.insert(obj(5, 5, "e"));

    let neighbors = tree.k_nearest_neighbors(5, 5, 3);
    assert_eq!(neighbors.len(), 3);

    // 距离为 0 的对象永远第一
    assert_eq!(neighbors[0].0.label, "e");
    assert_eq!(neighbors[0].1, 0.0);

    // 后续邻居距离非递减，且都来自四个角点
    let tied = 50f64.sqrt();
    for (object, distance) in &neighbors[1..] {
        assert!((*distance - tied).abs() < 1e-12);
        assert!(["a", "b", "c", "d"].contains(&object.label.as_str()));
    }
    assert_ne!(neighbors[1].0.label, neighbors[2].0.label);

    // k 超过对象总数时返回全部对象
    let all = tree.k_nearest_neighbors(5, 5, 99);
    assert_eq!(all.len(), 5);
    for window in all.windows(2) {
        assert!(window[0].1 <= window[1].1);
    }
}
