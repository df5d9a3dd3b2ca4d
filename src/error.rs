//! 错误类型定义
//!
//! 图本身的操作不会失败（以 bool / 空结果表示无效果），
//! 这里的错误只来自导入和命令行层。

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("未知命令: {0}")]
    InvalidCommand(String),

    #[error("无效参数: {0}")]
    InvalidArgument(String),

    #[error("不支持的格式: {0}")]
    UnsupportedFormat(String),

    #[error("行编辑器错误: {0}")]
    Readline(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 错误: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON 错误: {0}")]
    Json(#[from] serde_json::Error),
}
