use crate::rtree::PointObject;
use colored::*;

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format_ok(message: &str) -> String {
        message.green().to_string()
    }

    pub fn format_error(err: &str) -> String {
        format!("(error) {}", err.red())
    }

    pub fn format_count(n: usize) -> String {
        format!("(integer) {}", n.to_string().cyan())
    }

    /// 对象列表，每行一个编号条目
    pub fn format_objects(objects: &[PointObject]) -> String {
        if objects.is_empty() {
            return "(empty result)".yellow().to_string();
        }

        let mut result = String::new();
        for (i, object) in objects.iter().enumerate() {
            result.push_str(&format!("{}) {}\n", (i + 1).to_string().blue(), object));
        }
        result.trim_end().to_string()
    }

    /// 近邻列表，附带到查询点的距离
    pub fn format_neighbors(neighbors: &[(PointObject, f64)]) -> String {
        if neighbors.is_empty() {
            return "(empty result)".yellow().to_string();
        }

        let mut result = String::new();
        for (i, (object, distance)) in neighbors.iter().enumerate() {
            result.push_str(&format!(
                "{}) {}  distance {}\n",
                (i + 1).to_string().blue(),
                object,
                format!("{:.2}", distance).cyan()
            ));
        }
        result.trim_end().to_string()
    }

    pub fn format_prompt() -> String {
        format!("{} ", "planar>".blue())
    }

    pub fn format_help_message() -> String {
        [
            "Available commands:",
            "  INSERT x y label       insert one point object",
            "  LOAD path              bulk load `x y label` records from a file",
            "  SEARCH x y radius      list objects within radius of (x, y)",
            "  NEAREST x y            find the closest object to (x, y)",
            "  KNN x y k              find the k closest objects to (x, y)",
            "  DUMP                   print the tree structure",
            "  HELP                   show this message",
            "  QUIT                   exit",
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(x: i32, y: i32, label: &str) -> PointObject {
        PointObject::new(x, y, label).unwrap()
    }

    #[test]
    fn test_format_objects_numbers_entries() {
        colored::control::set_override(false);
        let objects = vec![obj(1, 2, "a"), obj(3, 4, "b")];
        let formatted = OutputFormatter::format_objects(&objects);
        assert_eq!(formatted, "1) (1, 2) - a\n2) (3, 4) - b");
    }

    #[test]
    fn test_format_neighbors_includes_distance() {
        colored::control::set_override(false);
        let neighbors = vec![(obj(0, 0, "n"), 2.5)];
        let formatted = OutputFormatter::format_neighbors(&neighbors);
        assert_eq!(formatted, "1) (0, 0) - n  distance 2.50");
    }

    #[test]
    fn test_format_empty_results() {
        colored::control::set_override(false);
        assert_eq!(OutputFormatter::format_objects(&[]), "(empty result)");
        assert_eq!(OutputFormatter::format_neighbors(&[]), "(empty result)");
    }
}
