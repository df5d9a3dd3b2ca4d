//! 结果打印器
//!
//! 提供表格和垂直格式的度数输出，以及顶点 ID 列表和统计信息的格式化

use crate::graph::{DirectedGraph, VertexDegree};
use crate::types::VertexId;
use prettytable::{format, row, Table};

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
}

/// 结果打印器
#[derive(Debug)]
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 顶点 ID 列表，空格分隔
    pub fn format_ids(&self, ids: &[VertexId]) -> String {
        if ids.is_empty() {
            return "(empty)".to_string();
        }
        ids.iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 边列表
    pub fn format_edges(&self, graph: &DirectedGraph) -> String {
        if graph.edge_count() == 0 {
            return "(no edges)".to_string();
        }
        graph.to_string()
    }

    /// 度数表
    pub fn format_degrees(&self, degrees: &[VertexDegree]) -> String {
        if degrees.is_empty() {
            return "Empty set".to_string();
        }
        match self.mode {
            PrintMode::Table => self.format_table(degrees),
            PrintMode::Vertical => self.format_vertical(degrees),
        }
    }

    /// 表格格式
    fn format_table(&self, degrees: &[VertexDegree]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Vertex", "In", "Out", "Degree"]);

        for d in degrees {
            table.add_row(row![d.id, d.in_degree, d.out_degree, d.degree]);
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, degrees: &[VertexDegree]) -> String {
        let mut output = String::new();

        for (i, d) in degrees.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));
            output.push_str(&format!("Vertex: {}\n", d.id));
            output.push_str(&format!("    In: {}\n", d.in_degree));
            output.push_str(&format!("   Out: {}\n", d.out_degree));
            output.push_str(&format!("Degree: {}\n", d.degree));
        }

        output
    }

    /// 统计信息
    pub fn format_stats(&self, graph: &DirectedGraph) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", graph.vertex_count()]);
        table.add_row(row!["Edge Count", graph.edge_count()]);
        table.add_row(row!["Capacity", graph.capacity()]);
        table.add_row(row!["Capacity Hint", graph.capacity_hint()]);
        table.to_string()
    }

    /// 帮助信息
    pub fn help_text() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                     digraph CLI 命令帮助
═══════════════════════════════════════════════════════════════

修改:
  add <from> <to>        添加边（顶点自动创建）
  del <from> <to>        删除边
  delv <id>              删除顶点及其所有边
  redirect <from> <to>   反转边的方向
  prune                  删除入度与出度之差最小的所有顶点
  load <file>            合并 CSV / JSONL 文件中的边
  clear                  清空图

查询:
  show                   按插入顺序显示所有边
  vertices               按 ID 升序显示顶点（会永久重排顶点）
  degrees                显示每个顶点的入度/出度/总度数
  mindeg <k>             总度数 >= k 的顶点
  indom                  入度大于出度的顶点
  two <id>               恰好两步可达的顶点
  nstep <id> <n>         恰好 n 步可达的顶点
  stats                  图统计信息

其他:
  mode table|vertical    设置度数表的显示模式
  help, h, ?             显示帮助
  quit, exit, q          退出程序

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}
