//! 图算法模块
//!
//! 度数查询与可达性查询，均以 `DirectedGraph` 方法的形式提供

mod degree;
mod reachability;
