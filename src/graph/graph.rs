//! 有向图数据结构
//!
//! 顶点集合与边序列都保证唯一。顶点随边自动创建；删除边不会删除顶点，
//! 删除顶点会级联删除与之相连的所有边。
//!
//! 两种删除的顺序语义不同：
//! - 删除边时后续的边整体前移，剩余边的相对顺序不变；
//! - 删除顶点时用最后一个顶点填补空位，顶点顺序会改变。

use super::edge::Edge;
use crate::config::GraphConfig;
use crate::types::{VertexId, VERTEX_CAPACITY_FACTOR};
use indexmap::IndexSet;
use std::fmt;
use std::io::{self, Write};
use std::ops::Add;
use tracing::{debug, trace};

/// 有向图
#[derive(Debug, Clone)]
pub struct DirectedGraph {
    /// 顶点集合（按插入顺序，删除时末尾元素填补空位）
    pub(crate) vertices: IndexSet<VertexId>,
    /// 边序列（按插入顺序）
    pub(crate) edges: Vec<Edge>,
    /// 配置
    config: GraphConfig,
}

impl DirectedGraph {
    /// 创建空图（默认容量提示）
    pub fn new() -> Self {
        Self::with_config(&GraphConfig::default())
    }

    /// 以指定容量提示创建空图
    pub fn with_capacity(capacity_hint: usize) -> Self {
        Self::with_config(&GraphConfig::new().with_capacity_hint(capacity_hint))
    }

    /// 按配置创建空图
    pub fn with_config(config: &GraphConfig) -> Self {
        let hint = config.capacity_hint;
        Self {
            vertices: IndexSet::with_capacity(hint * VERTEX_CAPACITY_FACTOR),
            edges: Vec::with_capacity(hint),
            config: *config,
        }
    }

    /// 容量提示
    pub fn capacity_hint(&self) -> usize {
        self.config.capacity_hint
    }

    /// 当前边容量
    pub fn capacity(&self) -> usize {
        self.edges.capacity()
    }

    // ==================== 查询 ====================

    /// 顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 图是否为空（没有顶点）
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 按当前顺序遍历顶点
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        self.vertices.iter().copied()
    }

    /// 当前顺序下的顶点 ID 列表
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices.iter().copied().collect()
    }

    /// 按插入顺序的所有边
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains(&id)
    }

    pub fn contains_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.position_of(Edge::new(from, to)).is_some()
    }

    fn position_of(&self, edge: Edge) -> Option<usize> {
        self.edges.iter().position(|e| *e == edge)
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 边已存在时返回 `false` 且不做任何修改；否则追加到边序列末尾，
    /// 并按先起点后终点的顺序补充尚不存在的顶点。
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> bool {
        let edge = Edge::new(from, to);
        if self.position_of(edge).is_some() {
            trace!(from, to, "edge already exists");
            return false;
        }

        self.reserve_for_edge();
        self.edges.push(edge);

        for id in edge.endpoints() {
            self.vertices.insert(id);
        }

        debug!(from, to, edges = self.edges.len(), "edge added");
        true
    }

    /// 容量用尽时按容量提示扩容
    fn reserve_for_edge(&mut self) {
        if self.edges.len() < self.edges.capacity() {
            return;
        }
        let step = self.config.growth_step();
        self.edges.reserve_exact(step);
        self.vertices.reserve(step * VERTEX_CAPACITY_FACTOR);
        trace!(capacity = self.edges.capacity(), "edge storage grown");
    }

    /// 删除边
    ///
    /// 只删除第一条匹配的边，后续边前移；顶点即使变为孤立也保留。
    pub fn delete_edge(&mut self, from: VertexId, to: VertexId) -> bool {
        match self.position_of(Edge::new(from, to)) {
            Some(index) => {
                self.edges.remove(index);
                debug!(from, to, "edge deleted");
                true
            }
            None => {
                trace!(from, to, "edge to delete not found");
                false
            }
        }
    }

    /// 反转边的方向
    ///
    /// 自环直接返回 `false`。边在序列中的位置保持不变。
    /// 注意：若反向边已经存在，反转后会出现重复的有序对。
    pub fn edge_redirect(&mut self, from: VertexId, to: VertexId) -> bool {
        if from == to {
            return false;
        }

        let target = Edge::new(from, to);
        match self.edges.iter_mut().find(|e| **e == target) {
            Some(edge) => {
                edge.reverse();
                debug!(from, to, "edge redirected");
                true
            }
            None => {
                trace!(from, to, "edge to redirect not found");
                false
            }
        }
    }

    // ==================== 顶点操作 ====================

    /// 删除顶点及所有与之相连的边
    pub fn delete_vertex(&mut self, id: VertexId) -> bool {
        if !self.vertices.swap_remove(&id) {
            trace!(id, "vertex to delete not found");
            return false;
        }

        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(id));

        debug!(id, cascaded = before - self.edges.len(), "vertex deleted");
        true
    }

    /// 按 ID 升序重排顶点（永久改变后续遍历顺序）
    pub fn sort_vertices(&mut self) {
        self.vertices.sort_unstable();
    }

    /// 排序后输出从 1 开始编号的顶点列表
    pub fn print_vertices<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<()> {
        self.sort_vertices();
        for (i, id) in self.vertices.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, id)?;
        }
        Ok(())
    }

    /// 排序后的顶点列表文本，格式同 [`DirectedGraph::print_vertices`]
    pub fn vertex_listing(&mut self) -> String {
        self.sort_vertices();
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, id)| format!("{}. {}\n", i + 1, id))
            .collect()
    }

    // ==================== 合并 ====================

    /// 图的并
    ///
    /// 结果先原样复制本图的顶点和边，再逐条添加另一个图的边（跳过重复）。
    /// 两个输入图都不会被修改。
    pub fn plus(&self, other: &DirectedGraph) -> DirectedGraph {
        let mut result = DirectedGraph::with_capacity(self.edges.len() + other.edges.len());
        result.edges.extend_from_slice(&self.edges);
        result.vertices.extend(self.vertices.iter().copied());

        for edge in &other.edges {
            result.add_edge(edge.from, edge.to);
        }

        debug!(
            vertices = result.vertex_count(),
            edges = result.edge_count(),
            "graphs merged"
        );
        result
    }
}

impl Default for DirectedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for DirectedGraph {
    fn eq(&self, other: &Self) -> bool {
        self.vertices.iter().eq(other.vertices.iter()) && self.edges == other.edges
    }
}

impl Eq for DirectedGraph {}

impl Add for &DirectedGraph {
    type Output = DirectedGraph;

    fn add(self, other: &DirectedGraph) -> DirectedGraph {
        self.plus(other)
    }
}

impl<E: Into<Edge>> Extend<E> for DirectedGraph {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for edge in iter {
            let edge = edge.into();
            self.add_edge(edge.from, edge.to);
        }
    }
}

impl<E: Into<Edge>> FromIterator<E> for DirectedGraph {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut graph = DirectedGraph::new();
        graph.extend(iter);
        graph
    }
}

impl fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}. {}", i + 1, edge)?;
        }
        Ok(())
    }
}
