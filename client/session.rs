use crate::client::formatter::OutputFormatter;
use crate::loader;
use crate::rtree::RTree;
use std::path::Path;

/// 参数解析工具
struct ArgumentParser<'a> {
    args: &'a [String],
    command_name: &'static str,
}

impl<'a> ArgumentParser<'a> {
    fn new(args: &'a [String], command_name: &'static str) -> Self {
        Self { args, command_name }
    }

    /// 检查参数数量（不含命令本身）
    fn check_arg_count(&self, expected: usize) -> Result<(), String> {
        if self.args.len() != expected + 1 {
            return Err(format!(
                "wrong number of arguments for '{}' command. Expected {}, got {}",
                self.command_name,
                expected,
                self.args.len() - 1
            ));
        }
        Ok(())
    }

    fn get_str(&self, index: usize, param_name: &str) -> Result<&str, String> {
        match self.args.get(index) {
            Some(s) => Ok(s),
            None => Err(format!("missing {} parameter", param_name)),
        }
    }

    fn get_i32(&self, index: usize, param_name: &str) -> Result<i32, String> {
        self.get_str(index, param_name)?
            .parse()
            .map_err(|_| format!("invalid {}: expected integer", param_name))
    }

    fn get_f64(&self, index: usize, param_name: &str) -> Result<f64, String> {
        self.get_str(index, param_name)?
            .parse()
            .map_err(|_| format!("invalid {}: expected number", param_name))
    }

    fn get_usize(&self, index: usize, param_name: &str) -> Result<usize, String> {
        self.get_str(index, param_name)?
            .parse()
            .map_err(|_| format!("invalid {}: expected non-negative integer", param_name))
    }
}

/// 交互会话：持有索引并把命令分发到核心操作
pub struct Session {
    tree: RTree,
}

impl Session {
    pub fn new(max_entries: usize) -> Self {
        Self {
            tree: RTree::new(max_entries),
        }
    }

    pub fn tree(&self) -> &RTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut RTree {
        &mut self.tree
    }

    /// 执行一条命令并返回格式化后的输出
    pub fn execute(&mut self, parts: &[String]) -> String {
        if parts.is_empty() {
            return String::new();
        }

        let result = match parts[0].to_uppercase().as_str() {
            "INSERT" => self.cmd_insert(parts),
            "LOAD" => self.cmd_load(parts),
            "SEARCH" => self.cmd_search(parts),
            "NEAREST" => self.cmd_nearest(parts),
            "KNN" => self.cmd_knn(parts),
            "DUMP" => Ok(self.tree.dump().trim_end().to_string()),
            other => Err(format!("unknown command '{}'. Type HELP for usage", other)),
        };

        match result {
            Ok(output) => output,
            Err(err) => OutputFormatter::format_error(&err),
        }
    }

    fn cmd_insert(&mut self, parts: &[String]) -> Result<String, String> {
        let parser = ArgumentParser::new(parts, "INSERT");
        parser.check_arg_count(3)?;
        let x = parser.get_i32(1, "x")?;
        let y = parser.get_i32(2, "y")?;
        let label = parser.get_str(3, "label")?;

        self.tree
            .insert_point(x, y, label)
            .map_err(|e| e.to_string())?;
        Ok(OutputFormatter::format_ok("OK"))
    }

    fn cmd_load(&mut self, parts: &[String]) -> Result<String, String> {
        let parser = ArgumentParser::new(parts, "LOAD");
        parser.check_arg_count(1)?;
        let path = parser.get_str(1, "path")?;

        let count =
            loader::load_objects(&mut self.tree, Path::new(path)).map_err(|e| e.to_string())?;
        Ok(OutputFormatter::format_count(count))
    }

    fn cmd_search(&mut self, parts: &[String]) -> Result<String, String> {
        let parser = ArgumentParser::new(parts, "SEARCH");
        parser.check_arg_count(3)?;
        let x = parser.get_i32(1, "x")?;
        let y = parser.get_i32(2, "y")?;
        let radius = parser.get_f64(3, "radius")?;

        let results = self.tree.search_radius(x, y, radius);
        Ok(OutputFormatter::format_objects(&results))
    }

    fn cmd_nearest(&mut self, parts: &[String]) -> Result<String, String> {
        let parser = ArgumentParser::new(parts, "NEAREST");
        parser.check_arg_count(2)?;
        let x = parser.get_i32(1, "x")?;
        let y = parser.get_i32(2, "y")?;

        match self.tree.nearest_neighbor(x, y) {
            Some((object, distance)) => Ok(OutputFormatter::format_neighbors(&[(
                object, distance,
            )])),
            None => Ok(OutputFormatter::format_neighbors(&[])),
        }
    }

    fn cmd_knn(&mut self, parts: &[String]) -> Result<String, String> {
        let parser = ArgumentParser::new(parts, "KNN");
        parser.check_arg_count(3)?;
        let x = parser.get_i32(1, "x")?;
        let y = parser.get_i32(2, "y")?;
        let k = parser.get_usize(3, "k")?;

        let neighbors = self.tree.k_nearest_neighbors(x, y, k);
        Ok(OutputFormatter::format_neighbors(&neighbors))
    }
}

/// 把一行输入拆分为命令字段，过滤控制字符
pub fn parse_command_line(input: &str) -> Vec<String> {
    let cleaned: String = input
        .chars()
        .filter(|&c| c.is_ascii_graphic() || c == ' ' || c == '\t')
        .collect();

    cleaned.split_whitespace().map(|s| s.to_string()).collect()
}
