//! 批量加载模块
//!
//! 从文本文件读取对象记录并插入索引。每行一条记录，
//! 空白分隔的 `x y label` 三个字段：
//!
//! ```text
//! 120 340 hospital
//! 80 15 school
//! ```
//!
//! 空行被跳过。遇到第一条非法记录（字段缺失或多余、坐标不是整数、
//! 标签超长）时立即返回带行号的错误，之前的记录保留在树中，
//! 非法记录本身不会触碰树，其后的记录不再处理。

use crate::rtree::{ObjectError, PointObject, RTree};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// 批量加载相关的错误类型
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 非法记录（包含行号和原因）
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// 标签超过长度上限
    #[error("line {line}: label is {len} bytes, limit is {max}")]
    LabelTooLong { line: usize, len: usize, max: usize },
}

/// 从文件批量加载对象，返回成功插入的数量
pub fn load_objects(tree: &mut RTree, path: &Path) -> Result<usize, LoadError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut count = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;

        let record = line.trim();
        if record.is_empty() {
            continue;
        }

        let object = parse_record(record, line_no)?;
        tree.insert(object);
        count += 1;
    }

    info!(count, path = %path.display(), "bulk load complete");
    Ok(count)
}

/// 解析一条 `x y label` 记录，完整校验通过后才构造对象
fn parse_record(record: &str, line: usize) -> Result<PointObject, LoadError> {
    let mut fields = record.split_whitespace();

    let x = parse_coord(fields.next(), "x", line)?;
    let y = parse_coord(fields.next(), "y", line)?;
    let label = fields.next().ok_or_else(|| LoadError::Malformed {
        line,
        reason: "missing label field".to_string(),
    })?;

    if fields.next().is_some() {
        return Err(LoadError::Malformed {
            line,
            reason: "trailing fields after label".to_string(),
        });
    }

    PointObject::new(x, y, label).map_err(|err| match err {
        ObjectError::LabelTooLong { len, max } => LoadError::LabelTooLong { line, len, max },
    })
}

fn parse_coord(field: Option<&str>, name: &str, line: usize) -> Result<i32, LoadError> {
    let field = field.ok_or_else(|| LoadError::Malformed {
        line,
        reason: format!("missing {} coordinate", name),
    })?;
    field.parse().map_err(|_| LoadError::Malformed {
        line,
        reason: format!("invalid {} coordinate '{}'", name, field),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_file() {
        let file = write_file("0 0 origin\n10 20 shop\n\n-5 7 park\n");
        let mut tree = RTree::default();

        let count = load_objects(&mut tree, file.path()).unwrap();
        assert_eq!(count, 3);
        assert_eq!(tree.len(), 3);

        let labels: Vec<String> = tree
            .search_radius(0, 0, 1e6)
            .into_iter()
            .map(|o| o.label)
            .collect();
        assert!(labels.contains(&"origin".to_string()));
        assert!(labels.contains(&"shop".to_string()));
        assert!(labels.contains(&"park".to_string()));
    }

    #[test]
    fn test_load_aborts_on_malformed_record() {
        let file = write_file("1 1 first\n2 not_a_number second\n3 3 third\n");
        let mut tree = RTree::default();

        let err = load_objects(&mut tree, file.path()).unwrap_err();
        match err {
            LoadError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {}", other),
        }

        // 非法行之前的记录保留，之后的不再加载
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_load_rejects_long_label() {
        let long_label = "x".repeat(80);
        let file = write_file(&format!("1 1 ok\n2 2 {}\n", long_label));
        let mut tree = RTree::default();

        let err = load_objects(&mut tree, file.path()).unwrap_err();
        match err {
            LoadError::LabelTooLong { line, len, .. } => {
                assert_eq!(line, 2);
                assert_eq!(len, 80);
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_load_rejects_trailing_fields() {
        let file = write_file("1 1 label extra\n");
        let mut tree = RTree::default();

        assert!(matches!(
            load_objects(&mut tree, file.path()),
            Err(LoadError::Malformed { line: 1, .. })
        ));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let mut tree = RTree::default();
        let result = load_objects(&mut tree, Path::new("/nonexistent/objects.txt"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
