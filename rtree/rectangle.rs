use serde::{Deserialize, Serialize};

/// 矩形边界框 - 用于表示R-tree中的最小边界矩形(MBR)
///
/// 坐标为整数，退化为单点时 min == max
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    pub min: [i32; 2], // [x_min, y_min]
    pub max: [i32; 2], // [x_max, y_max]
}

impl Rectangle {
    /// 创建新的矩形
    pub fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        assert!(x_min <= x_max && y_min <= y_max, "Invalid rectangle bounds");
        Rectangle {
            min: [x_min, y_min],
            max: [x_max, y_max],
        }
    }

    /// 创建一个点矩形
    pub fn from_point(x: i32, y: i32) -> Self {
        Rectangle {
            min: [x, y],
            max: [x, y],
        }
    }

    /// 计算矩形面积
    ///
    /// 用 i64 计算，32 位坐标范围内不会溢出
    pub fn area(&self) -> i64 {
        (self.max[0] - self.min[0]) as i64 * (self.max[1] - self.min[1]) as i64
    }

    /// 计算两个矩形的并集MBR
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        Rectangle {
            min: [
                self.min[0].min(other.min[0]),
                self.min[1].min(other.min[1]),
            ],
            max: [
                self.max[0].max(other.max[0]),
                self.max[1].max(other.max[1]),
            ],
        }
    }

    /// 判断两个矩形是否相交（边界相触也算相交）
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.min[0] <= other.max[0]
            && self.max[0] >= other.min[0]
            && self.min[1] <= other.max[1]
            && self.max[1] >= other.min[1]
    }

    /// 判断当前矩形是否包含另一个矩形
    pub fn contains(&self, other: &Rectangle) -> bool {
        self.min[0] <= other.min[0]
            && self.min[1] <= other.min[1]
            && self.max[0] >= other.max[0]
            && self.max[1] >= other.max[1]
    }

    /// 计算扩大到包含另一个矩形所需的面积增量
    ///
    /// 注意该运算不对称：减去的是 self 的面积，不是 other 的
    pub fn enlargement(&self, other: &Rectangle) -> i64 {
        self.union(other).area() - self.area()
    }

    /// 判断矩形是否为点（宽度和高度都为0）
    pub fn is_point(&self) -> bool {
        self.min[0] == self.max[0] && self.min[1] == self.max[1]
    }
}

/// 两点之间的欧氏距离
pub fn euclidean_distance(x1: i32, y1: i32, x2: i32, y2: i32) -> f64 {
    let dx = x2 as f64 - x1 as f64;
    let dy = y2 as f64 - y1 as f64;
    (dx * dx + dy * dy).sqrt()
}
