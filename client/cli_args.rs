use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "planar-cli",
    about = "A command line interface for the planar point index",
    long_about = "planar-cli is an interactive client for the planar 2D point index.\nIt lets you insert point objects, bulk load them from files, and run radius,\nnearest-neighbor and k-nearest-neighbor queries against the in-memory R-tree."
)]
pub struct CliArgs {
    /// 配置文件路径
    #[arg(short, long, default_value = "planar.toml")]
    pub config: String,

    /// 生成默认配置文件并退出
    #[arg(long)]
    pub generate_config: bool,

    /// Log level (overrides config file)
    #[arg(long)]
    pub log_level: Option<String>,

    /// 启动时先从文件批量加载对象
    #[arg(short, long)]
    pub load: Option<PathBuf>,

    /// Command to execute (if not in interactive mode)
    #[arg(trailing_var_arg = true)]
    pub command: Vec<String>,
}

impl CliArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn should_run_interactive(&self) -> bool {
        self.command.is_empty()
    }
}
