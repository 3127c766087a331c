// R-tree算法模块
//
// 这个模块包含R-tree的所有核心算法实现，按功能分解为不同的子模块：
// - insert: 插入和选择叶子算法
// - split: 二次分裂与向上传播
// - search: 半径范围查询
// - knn: 最近邻和K-最近邻查询
// - debug: 诊断用的树结构导出
// - utils: 路径解析与MBR向上修正

pub mod debug;
pub mod insert;
pub mod knn;
pub mod search;
pub mod split;
pub mod utils;
