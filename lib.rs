pub mod client;
pub mod config;
pub mod loader;
pub mod rtree;

use std::error::Error;

// 重新导出主要的公共接口
pub use rtree::{Entry, Node, NodeType, PointObject, RTree, Rectangle};

// 重新导出常用类型，便于二进制文件使用
pub use client::{CliArgs, OutputFormatter, Session};
pub use config::PlanarConfig;
pub use loader::LoadError;

pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;
