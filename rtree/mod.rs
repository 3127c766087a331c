pub mod algorithms;
pub mod node;
pub mod object;
pub mod rectangle;
#[allow(clippy::module_inception)]
pub mod rtree;

// 重新导出主要类型
pub use node::{Entry, Node, NodeType};
pub use object::{ObjectError, PointObject, MAX_LABEL_LEN};
pub use rectangle::{euclidean_distance, Rectangle};
pub use rtree::{NodeVisualization, RTree, TreeVisualization};
