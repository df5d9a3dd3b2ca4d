//! digraph CLI 工具
//!
//! 交互式命令行界面

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use digraph::cli::commands::format_for_path;
use digraph::cli::{CommandCompleter, CommandResult, Session};
use digraph::import::{load_graph, ImportFormat};
use digraph::{Error, GraphConfig, DEFAULT_CAPACITY_HINT};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "digraph-cli")]
#[command(about = "有向图命令行工具")]
struct Args {
    /// 启动时加载的边列表文件
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 输入格式: csv, jsonl（默认按扩展名推断）
    #[arg(short, long)]
    format: Option<String>,

    /// 容量提示（初始边容量及扩容增量）
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY_HINT)]
    capacity: usize,

    /// 执行单个命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = GraphConfig::new().with_capacity_hint(args.capacity);

    let mut session = match &args.input {
        Some(path) => {
            let format = match &args.format {
                Some(f) => f.parse::<ImportFormat>()?,
                None => format_for_path(path),
            };
            let (graph, stats) = load_graph(path, format, config.capacity_hint)
                .with_context(|| format!("无法加载 {}", path.display()))?;
            println!(
                "已加载 {}: {} 条边, {} 条重复, {} 条无法解析",
                path.display(),
                stats.edges_added,
                stats.duplicates,
                stats.errors
            );
            Session::with_graph(graph, config)
        }
        None => Session::new(config),
    };

    // 单个命令模式
    if let Some(command) = args.execute {
        if let CommandResult::Message(m) = session.execute_line(&command)? {
            println!("{}", m);
        }
        return Ok(());
    }

    // 交互模式
    println!("digraph CLI v{}", digraph::VERSION);
    println!("输入 'help' 查看命令列表，'quit' 退出\n");

    let mut editor: Editor<CommandCompleter, DefaultHistory> =
        Editor::new().map_err(|e| Error::Readline(e.to_string()))?;
    editor.set_helper(Some(CommandCompleter::new()));

    loop {
        let line = match editor.readline("digraph> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(Error::Readline(e.to_string()).into()),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line);

        match session.execute_line(line) {
            Ok(CommandResult::Exit) => break,
            Ok(CommandResult::Message(m)) => println!("{}", m),
            Err(e) => println!("{} {}", "错误:".red(), e),
        }
    }

    println!("再见！");
    Ok(())
}
