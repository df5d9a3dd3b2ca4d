//! 边定义
//!
//! 有向边是一对有序的顶点 ID，方向敏感：(1, 2) 与 (2, 1) 是不同的边。

use crate::types::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 有向边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// 起点
    pub from: VertexId,
    /// 终点
    pub to: VertexId,
}

impl Edge {
    /// 创建新边
    pub fn new(from: VertexId, to: VertexId) -> Self {
        Self { from, to }
    }

    /// 是否为自环
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    /// 原地反转方向
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    /// 端点（起点在前）
    pub fn endpoints(&self) -> [VertexId; 2] {
        [self.from, self.to]
    }

    /// 边是否与顶点相连
    pub fn touches(&self, id: VertexId) -> bool {
        self.from == id || self.to == id
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((from, to): (VertexId, VertexId)) -> Self {
        Self::new(from, to)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "From {} -> To {}", self.from, self.to)
    }
}
