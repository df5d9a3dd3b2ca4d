//! 通用类型定义

/// 顶点 ID（任意整数均合法）
pub type VertexId = i32;

/// 默认容量提示（边数）
pub const DEFAULT_CAPACITY_HINT: usize = 20;

/// 顶点存储容量相对边容量的倍数
pub const VERTEX_CAPACITY_FACTOR: usize = 2;
