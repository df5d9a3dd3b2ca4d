//! 可达性查询
//!
//! 沿出边恰好走 n 步可以到达的顶点。结果按首次出现的顺序排列：
//! 逐层展开时，每一层按上一层顶点的顺序、再按边的插入顺序依次追加邻居。

use crate::graph::DirectedGraph;
use crate::types::VertexId;
use indexmap::IndexSet;
use tracing::trace;

impl DirectedGraph {
    /// 出边指向的顶点（按边顺序，不去重）
    pub fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        self.edges
            .iter()
            .filter(|e| e.from == id)
            .map(|e| e.to)
            .collect()
    }

    /// 恰好两步可达的顶点（去重，不包含一步可达的结果，可能包含起点自身）
    pub fn vertices_within_two_steps(&self, id: VertexId) -> Vec<VertexId> {
        self.vertices_within_n_steps(id, 2)
    }

    /// 恰好 n 步可达的顶点（去重），`n <= 0` 时为空
    ///
    /// 每一层的边界都先去重再展开；重复顶点展开出的邻居只会排在
    /// 它首次出现时展开的邻居之后，因此去重不会改变最终结果及其顺序。
    ///
    /// 下一层只取决于当前层（含顺序），所以某一层重复出现后结果按周期循环，
    /// 剩余步数直接取模跳过。
    pub fn vertices_within_n_steps(&self, id: VertexId, n: i64) -> Vec<VertexId> {
        if n <= 0 {
            return Vec::new();
        }

        // 第 k 个元素是走 k 步后的边界
        let mut history: IndexSet<Vec<VertexId>> = IndexSet::new();
        let mut frontier = vec![id];
        let mut step: i64 = 0;

        while step < n {
            let (index, inserted) = history.insert_full(frontier);
            if !inserted {
                let period = step - index as i64;
                let offset = ((n - step) % period) as usize;
                trace!(id, n, step, period, "frontier cycle detected");
                return history
                    .get_index(index + offset)
                    .cloned()
                    .unwrap_or_default();
            }

            frontier = self.next_frontier(&history[index]);
            if frontier.is_empty() {
                return Vec::new();
            }
            step += 1;
        }

        frontier
    }

    /// 展开一层：按顺序追加每个顶点的邻居并去重
    fn next_frontier(&self, frontier: &[VertexId]) -> Vec<VertexId> {
        frontier
            .iter()
            .flat_map(|&v| self.neighbors(v))
            .collect::<IndexSet<VertexId>>()
            .into_iter()
            .collect()
    }
}
