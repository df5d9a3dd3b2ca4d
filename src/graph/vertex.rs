//! 顶点度数信息
//!
//! 顶点本身就是一个整数 ID，这里只定义它的度数快照。

use crate::types::VertexId;
use serde::{Deserialize, Serialize};

/// 单个顶点的度数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexDegree {
    /// 顶点 ID
    pub id: VertexId,
    /// 入度（作为终点的边数）
    pub in_degree: usize,
    /// 出度（作为起点的边数）
    pub out_degree: usize,
    /// 总度数（与该顶点相连的边数，自环只计一次）
    pub degree: usize,
}

impl VertexDegree {
    /// 入度与出度之差的绝对值
    pub fn difference(&self) -> usize {
        self.in_degree.abs_diff(self.out_degree)
    }

    /// 入度是否严格大于出度
    pub fn is_in_dominant(&self) -> bool {
        self.in_degree > self.out_degree
    }
}
