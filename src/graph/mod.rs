//! 图核心模块
//!
//! 定义边、顶点度数和有向图的核心数据结构

mod edge;
mod graph;
mod vertex;

pub use edge::Edge;
pub use graph::DirectedGraph;
pub use vertex::VertexDegree;

/// 测试用样例图：1→4, 2→4, 3→4, 4→5, 4→6, 5→7, 5→1, 7→6, 6→3
#[cfg(test)]
pub(crate) fn sample_graph() -> DirectedGraph {
    let mut g = DirectedGraph::new();
    for (from, to) in [
        (1, 4),
        (2, 4),
        (3, 4),
        (4, 5),
        (4, 6),
        (5, 7),
        (5, 1),
        (7, 6),
        (6, 3),
    ] {
        g.add_edge(from, to);
    }
    g
}
