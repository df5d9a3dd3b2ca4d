//! digraph - 可变的内存有向图
//!
//! 支持：
//! - 动态添加/删除边和顶点，顶点随边自动创建
//! - 按度数筛选顶点、删除入度与出度差最小的顶点
//! - 恰好 n 步可达的顶点查询
//! - 图的并
//! - 从 CSV / JSON Lines 导入边列表

pub mod algorithm;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod import;
pub mod types;

// 重导出常用类型
pub use config::GraphConfig;
pub use error::{Error, Result};
pub use graph::{DirectedGraph, Edge, VertexDegree};
pub use types::{VertexId, DEFAULT_CAPACITY_HINT};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
