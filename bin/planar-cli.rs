use std::io::{self, Write};

use planar::client::{parse_command_line, CliArgs, OutputFormatter, Session};
use planar::{loader, PlanarConfig, Result};
use tracing::Level;

fn main() -> Result<()> {
    let args = CliArgs::parse_args();

    // 生成默认配置文件
    if args.generate_config {
        let config = PlanarConfig::default();
        config.save_to_file(&args.config)?;
        println!("✅ Generated default configuration: {}", args.config);
        return Ok(());
    }

    // 加载配置
    let mut config = PlanarConfig::from_file(&args.config)?;

    // 命令行参数覆盖配置文件
    if let Some(log_level) = args.log_level.clone() {
        config.logging.level = log_level;
    }

    // 验证配置
    config.validate()?;

    // 初始化日志系统
    let level: Level = config.logging.level.parse().unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let mut session = Session::new(config.index.max_entries);

    // 启动时的批量加载
    if let Some(path) = &args.load {
        match loader::load_objects(session.tree_mut(), path) {
            Ok(count) => println!("{}", OutputFormatter::format_count(count)),
            Err(e) => {
                eprintln!("{}", OutputFormatter::format_error(&e.to_string()));
                std::process::exit(1);
            }
        }
    }

    if args.should_run_interactive() {
        run_interactive_mode(&mut session)?;
    } else {
        // 直接命令模式
        println!("{}", session.execute(&args.command));
    }

    Ok(())
}

fn run_interactive_mode(session: &mut Session) -> Result<()> {
    println!("planar-cli interactive mode");
    println!("Type 'HELP' for available commands, 'QUIT' to exit.");
    println!();

    let stdin = io::stdin();

    loop {
        // 显示提示符
        print!("{}", OutputFormatter::format_prompt());
        io::stdout().flush()?;

        // 读取用户输入
        let mut input = String::new();
        match stdin.read_line(&mut input) {
            Ok(0) => {
                // EOF (Ctrl+D)
                println!();
                break;
            }
            Ok(_) => {
                let parts = parse_command_line(&input);
                if parts.is_empty() {
                    continue;
                }

                // 处理特殊命令
                match parts[0].to_uppercase().as_str() {
                    "QUIT" | "EXIT" => break,
                    "HELP" => {
                        println!("{}", OutputFormatter::format_help_message());
                        continue;
                    }
                    _ => {
                        println!("{}", session.execute(&parts));
                    }
                }
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }

    Ok(())
}
