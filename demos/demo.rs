//! digraph 演示脚本
//!
//! 依次执行十个场景并把结果打印到标准输出

use digraph::{DirectedGraph, VertexId};
use std::io::{self, Write};

const SAMPLE_EDGES: &[(VertexId, VertexId)] = &[
    (1, 4),
    (2, 4),
    (3, 4),
    (4, 5),
    (4, 6),
    (5, 7),
    (5, 1),
    (7, 6),
    (6, 3),
];

fn sample() -> DirectedGraph {
    SAMPLE_EDGES.iter().copied().collect()
}

fn diamond() -> DirectedGraph {
    let mut g = DirectedGraph::new();
    g.add_edge(1, 2);
    g.add_edge(1, 3);
    g.add_edge(2, 4);
    g.add_edge(3, 4);
    g
}

fn print_ids(out: &mut impl Write, ids: &[VertexId]) -> io::Result<()> {
    for id in ids {
        write!(out, "{} ", id)?;
    }
    writeln!(out)
}

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Test 1")?;
    writeln!(out, "{}\n", diamond())?;

    writeln!(out, "Test 2")?;
    {
        let mut g = DirectedGraph::new();
        for (from, to) in [(1, 1), (1, 3), (3, 2), (2, 4), (2, 4), (4, 2)] {
            writeln!(out, "{}", g.add_edge(from, to))?;
        }
        writeln!(out, "{}\n", g)?;
    }

    writeln!(out, "Test 3")?;
    {
        let mut g = DirectedGraph::new();
        for (from, to) in [(1, 1), (1, 3), (2, 4)] {
            g.add_edge(from, to);
            g.print_vertices(&mut out)?;
        }
    }

    writeln!(out, "Test 4")?;
    print_ids(&mut out, &sample().vertices_with_min_degree(3))?;

    writeln!(out, "Test 5")?;
    print_ids(&mut out, &sample().vertices_with_in_dominant_degree())?;

    writeln!(out, "Test 6")?;
    {
        let mut g = diamond();
        writeln!(out, "{}\n", g)?;
        writeln!(out, "{}", g.edge_redirect(1, 2))?;
        writeln!(out, "{}", g.edge_redirect(1, 4))?;
        writeln!(out, "{}\n", g)?;
    }

    writeln!(out, "Test 7")?;
    {
        let mut g = sample();
        writeln!(out, "{}\n", g)?;
        writeln!(out, "{}", g.delete_edge(1, 4))?;
        writeln!(out, "{}", g.delete_edge(1, 2))?;
        writeln!(out, "{}\n", g)?;
    }

    writeln!(out, "Test 8")?;
    {
        let mut g = sample();
        writeln!(out, "{}\n", g)?;
        writeln!(out, "{}", g.delete_vertex(4))?;
        writeln!(out, "{}", g.delete_vertex(0))?;
        writeln!(out, "{}\n", g)?;
    }

    writeln!(out, "Test 9")?;
    {
        let mut g = sample();
        writeln!(out, "{}\n", g)?;
        g.print_vertices(&mut out)?;
        g.delete_vertices_with_min_degree_difference();
        writeln!(out, "{}\n", g)?;
        g.print_vertices(&mut out)?;
    }

    writeln!(out, "Test 10")?;
    {
        let g = sample();
        print_ids(&mut out, &g.vertices_within_two_steps(1))?;
        print_ids(&mut out, &g.vertices_within_n_steps(1, 3))?;

        let mut other = DirectedGraph::new();
        other.add_edge(7, 8);
        other.add_edge(1, 4);
        writeln!(out, "{}", g.plus(&other))?;
    }

    Ok(())
}
