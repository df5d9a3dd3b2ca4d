//! 度数查询
//!
//! 入度 = 作为终点的边数，出度 = 作为起点的边数（自环同时计入两者），
//! 总度数 = 与顶点相连的边数（自环只计一次）。

use crate::graph::{DirectedGraph, VertexDegree};
use crate::types::VertexId;
use tracing::debug;

impl DirectedGraph {
    /// 入度
    pub fn in_degree(&self, id: VertexId) -> usize {
        self.edges.iter().filter(|e| e.to == id).count()
    }

    /// 出度
    pub fn out_degree(&self, id: VertexId) -> usize {
        self.edges.iter().filter(|e| e.from == id).count()
    }

    /// 总度数
    pub fn degree(&self, id: VertexId) -> usize {
        self.edges.iter().filter(|e| e.touches(id)).count()
    }

    /// 单个顶点的度数快照，顶点不存在时返回 `None`
    pub fn vertex_degree(&self, id: VertexId) -> Option<VertexDegree> {
        self.contains_vertex(id).then(|| self.degree_of(id))
    }

    /// 所有顶点的度数（当前顶点顺序）
    pub fn degrees(&self) -> Vec<VertexDegree> {
        self.vertices().map(|id| self.degree_of(id)).collect()
    }

    fn degree_of(&self, id: VertexId) -> VertexDegree {
        let mut d = VertexDegree {
            id,
            in_degree: 0,
            out_degree: 0,
            degree: 0,
        };
        for edge in &self.edges {
            if edge.from == id {
                d.out_degree += 1;
            }
            if edge.to == id {
                d.in_degree += 1;
            }
            if edge.touches(id) {
                d.degree += 1;
            }
        }
        d
    }

    /// 总度数不小于 `min_degree` 的顶点（当前顶点顺序，不排序）
    pub fn vertices_with_min_degree(&self, min_degree: i64) -> Vec<VertexId> {
        self.degrees()
            .into_iter()
            .filter(|d| d.degree as i64 >= min_degree)
            .map(|d| d.id)
            .collect()
    }

    /// 入度严格大于出度的顶点（当前顶点顺序）
    pub fn vertices_with_in_dominant_degree(&self) -> Vec<VertexId> {
        self.degrees()
            .into_iter()
            .filter(VertexDegree::is_in_dominant)
            .map(|d| d.id)
            .collect()
    }

    /// 删除入度与出度之差（绝对值）最小的所有顶点
    ///
    /// 差值在任何删除发生之前一次性计算。空图返回 `false`；
    /// 否则至少删除一个顶点并返回 `true`，若所有顶点差值相同则整个图被清空。
    pub fn delete_vertices_with_min_degree_difference(&mut self) -> bool {
        let degrees = self.degrees();
        let Some(min) = degrees.iter().map(VertexDegree::difference).min() else {
            return false;
        };

        let doomed: Vec<VertexId> = degrees
            .iter()
            .filter(|d| d.difference() == min)
            .map(|d| d.id)
            .collect();

        for &id in &doomed {
            self.delete_vertex(id);
        }

        debug!(min_difference = min, deleted = doomed.len(), "min difference vertices deleted");
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{sample_graph, DirectedGraph};

    #[test]
    fn test_degree_counts() {
        let g = sample_graph();
        assert_eq!(g.degree(4), 5);
        assert_eq!(g.in_degree(4), 3);
        assert_eq!(g.out_degree(4), 2);
        assert_eq!(g.degree(42), 0);
        assert!(g.vertex_degree(42).is_none());

        let d = g.vertex_degree(6).unwrap();
        assert_eq!((d.in_degree, d.out_degree, d.degree), (2, 1, 3));
    }

    #[test]
    fn test_self_loop_degree() {
        let mut g = DirectedGraph::new();
        g.add_edge(1, 1);
        g.add_edge(1, 2);
        let d = g.vertex_degree(1).unwrap();
        assert_eq!(d.in_degree, 1);
        assert_eq!(d.out_degree, 2);
        assert_eq!(d.degree, 2);
    }

    #[test]
    fn test_vertices_with_min_degree() {
        let g = sample_graph();
        assert_eq!(g.vertices_with_min_degree(3), vec![4, 5, 6]);
        assert_eq!(g.vertices_with_min_degree(0), g.vertex_ids());
        assert_eq!(g.vertices_with_min_degree(-5), g.vertex_ids());
        assert!(g.vertices_with_min_degree(6).is_empty());
        assert!(DirectedGraph::new().vertices_with_min_degree(0).is_empty());
    }

    #[test]
    fn test_min_degree_follows_vertex_order() {
        let mut g = sample_graph();
        g.delete_vertex(2);
        // 2 的位置被 7 填补
        assert_eq!(g.vertex_ids(), vec![1, 4, 7, 3, 5, 6]);
        assert_eq!(g.vertices_with_min_degree(2), vec![1, 4, 7, 3, 5, 6]);
        assert_eq!(g.vertices_with_min_degree(3), vec![4, 5, 6]);
    }

    #[test]
    fn test_vertices_with_in_dominant_degree() {
        let g = sample_graph();
        // 4: 入 3 出 2；6: 入 2 出 1；3: 入 1 出 1 不满足
        assert_eq!(g.vertices_with_in_dominant_degree(), vec![4, 6]);
        assert!(DirectedGraph::new().vertices_with_in_dominant_degree().is_empty());
    }

    #[test]
    fn test_delete_min_degree_difference() {
        let mut g = sample_graph();
        // 差值为 0 的顶点：1、3、7
        assert!(g.delete_vertices_with_min_degree_difference());
        assert_eq!(
            g.to_string(),
            "1. From 2 -> To 4\n2. From 4 -> To 5\n3. From 4 -> To 6"
        );
        assert_eq!(g.vertex_ids(), vec![5, 4, 2, 6]);
        assert_eq!(g.vertex_listing(), "1. 2\n2. 4\n3. 5\n4. 6\n");
    }

    #[test]
    fn test_delete_min_difference_empty_graph() {
        let mut g = DirectedGraph::new();
        assert!(!g.delete_vertices_with_min_degree_difference());
    }

    #[test]
    fn test_delete_min_difference_all_tie() {
        let mut g = DirectedGraph::new();
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        g.add_edge(3, 1);
        assert!(g.delete_vertices_with_min_degree_difference());
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_delete_min_difference_always_progresses() {
        let mut g = sample_graph();
        while !g.is_empty() {
            let before = g.vertex_count();
            assert!(g.delete_vertices_with_min_degree_difference());
            assert!(g.vertex_count() < before);
        }
    }

    #[test]
    fn test_delete_min_difference_with_isolated_vertex() {
        let mut g = DirectedGraph::new();
        g.add_edge(1, 2);
        g.add_edge(1, 3);
        g.add_edge(4, 5);
        g.delete_edge(4, 5);
        // 孤立的 4、5 差值为 0
        assert!(g.delete_vertices_with_min_degree_difference());
        assert_eq!(g.vertex_count(), 3);
        assert!(!g.contains_vertex(4));
        assert!(!g.contains_vertex(5));
    }
}
