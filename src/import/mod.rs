//! 数据导入模块
//!
//! 支持从 CSV、JSON Lines 批量导入边列表，以及把边列表导出为 CSV。
//!
//! CSV 需要表头 `from,to`；JSON Lines 每行一个 `{"from": 1, "to": 2}` 对象。

use crate::error::{Error, Result};
use crate::graph::{DirectedGraph, Edge};
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;
use tracing::{info, warn};

/// 导入格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Csv,
    JsonLines,
}

impl FromStr for ImportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ImportFormat::Csv),
            "jsonl" | "json" => Ok(ImportFormat::JsonLines),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

/// 导入统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    /// 成功解析的边数
    pub edges_read: usize,
    /// 实际加入图中的边数
    pub edges_added: usize,
    /// 已存在而被跳过的边数
    pub duplicates: usize,
    /// 无法解析的记录数
    pub errors: usize,
    pub duration_ms: u64,
}

impl ImportStats {
    fn record(&mut self, added: bool) {
        self.edges_read += 1;
        if added {
            self.edges_added += 1;
        } else {
            self.duplicates += 1;
        }
    }
}

/// 边列表导入器
pub struct EdgeImporter<'a> {
    graph: &'a mut DirectedGraph,
}

impl<'a> EdgeImporter<'a> {
    /// 创建导入器
    pub fn new(graph: &'a mut DirectedGraph) -> Self {
        Self { graph }
    }

    /// 按格式从文件导入
    pub fn import_file<P: AsRef<Path>>(&mut self, path: P, format: ImportFormat) -> Result<ImportStats> {
        match format {
            ImportFormat::Csv => self.import_csv(path),
            ImportFormat::JsonLines => self.import_jsonl(path),
        }
    }

    /// 从 CSV 文件导入
    pub fn import_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<ImportStats> {
        let file = File::open(path)?;
        self.import_csv_reader(file)
    }

    /// 从任意输入读取 CSV
    pub fn import_csv_reader<R: Read>(&mut self, reader: R) -> Result<ImportStats> {
        let start = Instant::now();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut stats = ImportStats::default();
        for record in reader.deserialize::<Edge>() {
            match record {
                Ok(edge) => stats.record(self.graph.add_edge(edge.from, edge.to)),
                Err(e) => {
                    warn!(error = %e, "skipping malformed csv record");
                    stats.errors += 1;
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(?stats, "csv import finished");
        Ok(stats)
    }

    /// 从 JSON Lines 文件导入
    pub fn import_jsonl<P: AsRef<Path>>(&mut self, path: P) -> Result<ImportStats> {
        let file = File::open(path)?;
        self.import_jsonl_reader(BufReader::new(file))
    }

    /// 从任意输入读取 JSON Lines
    pub fn import_jsonl_reader<R: BufRead>(&mut self, reader: R) -> Result<ImportStats> {
        let start = Instant::now();
        let mut stats = ImportStats::default();

        // 按原始字节切行，非 UTF-8 的行与其他坏行一样计数跳过
        for line in reader.split(b'\n') {
            let line = line?;
            let line = trim_ascii_whitespace(&line);
            if line.is_empty() {
                continue;
            }

            match parse_json_edge(line) {
                Ok(edge) => stats.record(self.graph.add_edge(edge.from, edge.to)),
                Err(e) => {
                    warn!(error = %e, "skipping malformed json line");
                    stats.errors += 1;
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(?stats, "jsonl import finished");
        Ok(stats)
    }
}

fn parse_json_edge(line: &[u8]) -> Result<Edge> {
    Ok(serde_json::from_slice(line)?)
}

fn trim_ascii_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

/// 从文件读取一个新图
pub fn load_graph<P: AsRef<Path>>(
    path: P,
    format: ImportFormat,
    capacity_hint: usize,
) -> Result<(DirectedGraph, ImportStats)> {
    let mut graph = DirectedGraph::with_capacity(capacity_hint);
    let stats = EdgeImporter::new(&mut graph).import_file(path, format)?;
    Ok((graph, stats))
}

/// 按当前边顺序导出 CSV（带表头）
pub fn export_csv<W: Write>(graph: &DirectedGraph, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for edge in graph.edges() {
        writer.serialize(edge)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    #[test]
    fn test_import_csv() {
        let mut graph = DirectedGraph::new();

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "from,to").unwrap();
        writeln!(file, "1,4").unwrap();
        writeln!(file, " 2 , 4 ").unwrap();
        writeln!(file, "1,4").unwrap();
        writeln!(file, "x,4").unwrap();

        let stats = EdgeImporter::new(&mut graph).import_csv(file.path()).unwrap();
        assert_eq!(stats.edges_read, 3);
        assert_eq!(stats.edges_added, 2);
        assert_eq!(stats.duplicates, 1);
        assert_eq!(stats.errors, 1);
        assert_eq!(graph.vertex_ids(), vec![1, 4, 2]);
    }

    #[test]
    fn test_import_jsonl() {
        let mut graph = DirectedGraph::new();

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"from":5,"to":7}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"from":7,"to":6}}"#).unwrap();
        writeln!(file, "not json").unwrap();

        let stats = EdgeImporter::new(&mut graph)
            .import_file(file.path(), ImportFormat::JsonLines)
            .unwrap();
        assert_eq!(stats.edges_added, 2);
        assert_eq!(stats.errors, 1);
        assert_eq!(graph.to_string(), "1. From 5 -> To 7\n2. From 7 -> To 6");
    }

    #[test]
    fn test_import_jsonl_skips_invalid_utf8() {
        let mut graph = DirectedGraph::new();
        let input = b"{\"from\":1,\"to\":2}\r\n\xff\xfe garbage\n{\"from\":2,\"to\":3}\n".to_vec();

        // 坏行只计入错误，后续行照常导入
        let stats = EdgeImporter::new(&mut graph)
            .import_jsonl_reader(Cursor::new(input))
            .unwrap();
        assert_eq!(stats.edges_added, 2);
        assert_eq!(stats.errors, 1);
        assert!(graph.contains_edge(1, 2));
        assert!(graph.contains_edge(2, 3));
    }

    #[test]
    fn test_import_missing_file() {
        let mut graph = DirectedGraph::new();
        let result = EdgeImporter::new(&mut graph).import_csv("/nonexistent/edges.csv");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_export_then_load() {
        let graph: DirectedGraph = [Edge::new(3, 1), Edge::new(1, 2), Edge::new(2, 3)]
            .into_iter()
            .collect();

        let mut buf = Vec::new();
        export_csv(&graph, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf.clone()).unwrap(), "from,to\n3,1\n1,2\n2,3\n");

        let mut restored = DirectedGraph::new();
        EdgeImporter::new(&mut restored)
            .import_csv_reader(Cursor::new(buf))
            .unwrap();
        assert_eq!(restored, graph);
    }

    #[test]
    fn test_load_graph() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "from,to\n1,2\n2,3").unwrap();

        let (graph, stats) = load_graph(file.path(), ImportFormat::Csv, 4).unwrap();
        assert_eq!(stats.edges_added, 2);
        assert_eq!(graph.capacity_hint(), 4);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("CSV".parse::<ImportFormat>().unwrap(), ImportFormat::Csv);
        assert_eq!("jsonl".parse::<ImportFormat>().unwrap(), ImportFormat::JsonLines);
        assert!("xml".parse::<ImportFormat>().is_err());
    }
}
