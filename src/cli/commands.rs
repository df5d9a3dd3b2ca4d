//! 命令处理
//!
//! 解析一行输入并在会话持有的图上执行

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use crate::cli::printer::{PrintMode, Printer};
use crate::config::GraphConfig;
use crate::error::{Error, Result};
use crate::graph::DirectedGraph;
use crate::import::{load_graph, ImportFormat};
use crate::types::VertexId;

/// 命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddEdge(VertexId, VertexId),
    DeleteEdge(VertexId, VertexId),
    DeleteVertex(VertexId),
    Redirect(VertexId, VertexId),
    Prune,
    Load(PathBuf),
    Clear,
    Show,
    Vertices,
    Degrees,
    MinDegree(i64),
    InDominant,
    TwoSteps(VertexId),
    NSteps(VertexId, i64),
    Stats,
    Mode(PrintMode),
    Help,
    Quit,
}

/// 命令执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
}

fn parse_arg<T: FromStr>(args: &[&str], index: usize, name: &str) -> Result<T> {
    let raw = args
        .get(index)
        .ok_or_else(|| Error::InvalidArgument(format!("缺少参数 <{}>", name)))?;
    raw.parse::<T>()
        .map_err(|_| Error::InvalidArgument(format!("<{}> 不是整数: {}", name, raw)))
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let mut words = input.split_whitespace();
        let cmd = words
            .next()
            .ok_or_else(|| Error::InvalidCommand(String::new()))?
            .to_lowercase();
        let args: Vec<&str> = words.collect();

        let command = match cmd.as_str() {
            "add" => Command::AddEdge(parse_arg(&args, 0, "from")?, parse_arg(&args, 1, "to")?),
            "del" => Command::DeleteEdge(parse_arg(&args, 0, "from")?, parse_arg(&args, 1, "to")?),
            "delv" => Command::DeleteVertex(parse_arg(&args, 0, "id")?),
            "redirect" => {
                Command::Redirect(parse_arg(&args, 0, "from")?, parse_arg(&args, 1, "to")?)
            }
            "prune" => Command::Prune,
            "load" if args.is_empty() => {
                return Err(Error::InvalidArgument("缺少参数 <file>".to_string()))
            }
            "load" => Command::Load(PathBuf::from(args.join(" "))),
            "clear" => Command::Clear,
            "show" => Command::Show,
            "vertices" => Command::Vertices,
            "degrees" => Command::Degrees,
            "mindeg" => Command::MinDegree(parse_arg(&args, 0, "k")?),
            "indom" => Command::InDominant,
            "two" => Command::TwoSteps(parse_arg(&args, 0, "id")?),
            "nstep" => Command::NSteps(parse_arg(&args, 0, "id")?, parse_arg(&args, 1, "n")?),
            "stats" | "info" => Command::Stats,
            "mode" => match args.first().map(|m| m.to_lowercase()).as_deref() {
                Some("table") => Command::Mode(PrintMode::Table),
                Some("vertical") => Command::Mode(PrintMode::Vertical),
                _ => return Err(Error::InvalidArgument("用法: mode table|vertical".to_string())),
            },
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(Error::InvalidCommand(other.to_string())),
        };

        Ok(command)
    }
}

/// 根据扩展名推断导入格式，默认 CSV
pub fn format_for_path(path: &Path) -> ImportFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("jsonl") || ext.eq_ignore_ascii_case("json") => {
            ImportFormat::JsonLines
        }
        _ => ImportFormat::Csv,
    }
}

/// 交互会话
pub struct Session {
    graph: DirectedGraph,
    config: GraphConfig,
    printer: Printer,
}

impl Session {
    pub fn new(config: GraphConfig) -> Self {
        Self::with_graph(DirectedGraph::with_config(&config), config)
    }

    pub fn with_graph(graph: DirectedGraph, config: GraphConfig) -> Self {
        Self {
            graph,
            config,
            printer: Printer::default(),
        }
    }

    pub fn graph(&self) -> &DirectedGraph {
        &self.graph
    }

    /// 解析并执行一行输入
    pub fn execute_line(&mut self, input: &str) -> Result<CommandResult> {
        let command: Command = input.parse()?;
        self.execute(command)
    }

    /// 执行命令
    pub fn execute(&mut self, command: Command) -> Result<CommandResult> {
        debug!(?command, "executing command");
        let message = match command {
            Command::AddEdge(from, to) => self.graph.add_edge(from, to).to_string(),
            Command::DeleteEdge(from, to) => self.graph.delete_edge(from, to).to_string(),
            Command::DeleteVertex(id) => self.graph.delete_vertex(id).to_string(),
            Command::Redirect(from, to) => self.graph.edge_redirect(from, to).to_string(),
            Command::Prune => self
                .graph
                .delete_vertices_with_min_degree_difference()
                .to_string(),
            Command::Load(path) => {
                let format = format_for_path(&path);
                let (other, stats) = load_graph(&path, format, self.config.capacity_hint)?;
                self.graph = self.graph.plus(&other);
                format!(
                    "已合并 {} 条边（{} 条无法解析），当前 {} 个顶点, {} 条边",
                    stats.edges_added,
                    stats.errors,
                    self.graph.vertex_count(),
                    self.graph.edge_count()
                )
            }
            Command::Clear => {
                self.graph = DirectedGraph::with_config(&self.config);
                "图已清空".to_string()
            }
            Command::Show => self.printer.format_edges(&self.graph),
            Command::Vertices => {
                let listing = self.graph.vertex_listing();
                if listing.is_empty() {
                    "(no vertices)".to_string()
                } else {
                    listing.trim_end().to_string()
                }
            }
            Command::Degrees => self.printer.format_degrees(&self.graph.degrees()),
            Command::MinDegree(k) => self
                .printer
                .format_ids(&self.graph.vertices_with_min_degree(k)),
            Command::InDominant => self
                .printer
                .format_ids(&self.graph.vertices_with_in_dominant_degree()),
            Command::TwoSteps(id) => self
                .printer
                .format_ids(&self.graph.vertices_within_two_steps(id)),
            Command::NSteps(id, n) => self
                .printer
                .format_ids(&self.graph.vertices_within_n_steps(id, n)),
            Command::Stats => self.printer.format_stats(&self.graph),
            Command::Mode(mode) => {
                self.printer.set_mode(mode);
                format!("显示模式: {:?}", mode)
            }
            Command::Help => Printer::help_text(),
            Command::Quit => return Ok(CommandResult::Exit),
        };

        Ok(CommandResult::Message(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn message(result: Result<CommandResult>) -> String {
        match result.unwrap() {
            CommandResult::Message(m) => m,
            CommandResult::Exit => panic!("unexpected exit"),
        }
    }

    fn sample_session() -> Session {
        let mut session = Session::new(GraphConfig::default());
        for line in [
            "add 1 4", "add 2 4", "add 3 4", "add 4 5", "add 4 6", "add 5 7", "add 5 1",
            "add 7 6", "add 6 3",
        ] {
            assert_eq!(message(session.execute_line(line)), "true");
        }
        session
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("add 1 2".parse::<Command>().unwrap(), Command::AddEdge(1, 2));
        assert_eq!("NSTEP -1 3".parse::<Command>().unwrap(), Command::NSteps(-1, 3));
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
        assert!(matches!("add 1".parse::<Command>(), Err(Error::InvalidArgument(_))));
        assert!(matches!("add a b".parse::<Command>(), Err(Error::InvalidArgument(_))));
        assert!(matches!("frobnicate".parse::<Command>(), Err(Error::InvalidCommand(_))));
        assert!(matches!("mode wide".parse::<Command>(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_session_queries() {
        let mut s = sample_session();
        assert_eq!(message(s.execute_line("add 1 4")), "false");
        assert_eq!(message(s.execute_line("mindeg 3")), "4 5 6");
        assert_eq!(message(s.execute_line("indom")), "4 6");
        assert_eq!(message(s.execute_line("two 1")), "5 6");
        assert_eq!(message(s.execute_line("nstep 1 3")), "7 1 3");
        assert_eq!(message(s.execute_line("nstep 1 0")), "(empty)");
    }

    #[test]
    fn test_session_mutations() {
        let mut s = sample_session();
        assert_eq!(message(s.execute_line("redirect 2 2")), "false");
        assert_eq!(message(s.execute_line("delv 4")), "true");
        assert_eq!(message(s.execute_line("delv 4")), "false");
        assert_eq!(
            message(s.execute_line("show")),
            "1. From 5 -> To 7\n2. From 5 -> To 1\n3. From 7 -> To 6\n4. From 6 -> To 3"
        );
        assert_eq!(
            message(s.execute_line("vertices")),
            "1. 1\n2. 2\n3. 3\n4. 5\n5. 6\n6. 7"
        );
        assert_eq!(message(s.execute_line("prune")), "true");
        assert_eq!(message(s.execute_line("clear")), "图已清空");
        assert_eq!(s.graph().vertex_count(), 0);
        assert_eq!(message(s.execute_line("prune")), "false");
    }

    #[test]
    fn test_session_load_merges() {
        let mut file = Builder::new().suffix(".jsonl").tempfile().unwrap();
        writeln!(file, r#"{{"from":1,"to":4}}"#).unwrap();
        writeln!(file, r#"{{"from":9,"to":1}}"#).unwrap();

        let mut s = sample_session();
        let line = format!("load {}", file.path().display());
        message(s.execute_line(&line));
        assert_eq!(s.graph().edge_count(), 10);
        assert!(s.graph().contains_edge(9, 1));
    }

    #[test]
    fn test_session_quit() {
        let mut s = Session::new(GraphConfig::default());
        assert_eq!(s.execute_line("exit").unwrap(), CommandResult::Exit);
    }

    #[test]
    fn test_format_for_path() {
        assert_eq!(format_for_path(Path::new("a.JSONL")), ImportFormat::JsonLines);
        assert_eq!(format_for_path(Path::new("a.csv")), ImportFormat::Csv);
        assert_eq!(format_for_path(Path::new("edges")), ImportFormat::Csv);
    }
}
