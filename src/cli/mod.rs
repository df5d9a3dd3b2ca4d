//! 交互式命令行模块

pub mod commands;
pub mod completer;
pub mod printer;

pub use commands::{Command, CommandResult, Session};
pub use completer::CommandCompleter;
pub use printer::{PrintMode, Printer};
