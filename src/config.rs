//! 图配置

use crate::types::DEFAULT_CAPACITY_HINT;
use serde::{Deserialize, Serialize};

/// 图配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// 容量提示：初始边容量，同时也是每次扩容的增量
    pub capacity_hint: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            capacity_hint: DEFAULT_CAPACITY_HINT,
        }
    }
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置容量提示
    pub fn with_capacity_hint(mut self, hint: usize) -> Self {
        self.capacity_hint = hint;
        self
    }

    /// 扩容增量，提示为 0 时退回默认值
    pub fn growth_step(&self) -> usize {
        if self.capacity_hint == 0 {
            DEFAULT_CAPACITY_HINT
        } else {
            self.capacity_hint
        }
    }
}
