use super::rectangle::{euclidean_distance, Rectangle};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 对象标签的最大长度（字节）
pub const MAX_LABEL_LEN: usize = 50;

/// 对象构造相关的错误类型
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ObjectError {
    /// 标签超过长度上限
    #[error("label is {len} bytes, limit is {max}")]
    LabelTooLong { len: usize, max: usize },
}

/// 2-D 点对象
///
/// 插入后不可变，由叶子节点的条目独占持有
#[derive(Debug, Display, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[display(fmt = "({}, {}) - {}", x, y, label)]
pub struct PointObject {
    pub x: i32,
    pub y: i32,
    pub label: String,
}

impl PointObject {
    /// 创建新的点对象，标签过长时返回错误而不是截断
    pub fn new(x: i32, y: i32, label: impl Into<String>) -> Result<Self, ObjectError> {
        let label = label.into();
        if label.len() > MAX_LABEL_LEN {
            return Err(ObjectError::LabelTooLong {
                len: label.len(),
                max: MAX_LABEL_LEN,
            });
        }
        Ok(PointObject { x, y, label })
    }

    /// 对象自身的边界矩形（退化为单点）
    pub fn rect(&self) -> Rectangle {
        Rectangle::from_point(self.x, self.y)
    }

    /// 到给定坐标的欧氏距离
    pub fn distance_to(&self, x: i32, y: i32) -> f64 {
        euclidean_distance(self.x, self.y, x, y)
    }
}
