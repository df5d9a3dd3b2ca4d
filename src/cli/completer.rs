//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全功能

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 命令列表
pub const COMMANDS: &[&str] = &[
    "add", "del", "delv", "redirect", "prune", "load", "clear",
    "show", "vertices", "degrees", "mindeg", "indom", "two", "nstep", "stats",
    "mode", "help", "quit", "exit",
];

/// 子命令映射
fn get_sub_commands(command: &str) -> Option<&'static [&'static str]> {
    match command {
        "mode" => Some(&["table", "vertical"]),
        _ => None,
    }
}

fn pairs<'a>(candidates: impl Iterator<Item = &'a &'static str>) -> Vec<Pair> {
    candidates
        .map(|c| Pair {
            display: c.to_string(),
            replacement: c.to_string(),
        })
        .collect()
}

/// digraph CLI 补全器
#[derive(Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }

    /// 计算补全起点与候选项
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let line_to_cursor = &line[..pos];
        let words: Vec<&str> = line_to_cursor.split_whitespace().collect();
        let at_word_end = !line_to_cursor.is_empty() && !line_to_cursor.ends_with(' ');

        match (words.as_slice(), at_word_end) {
            ([], _) => (pos, pairs(COMMANDS.iter())),
            ([current], true) => {
                let start = pos - current.len();
                let current = current.to_lowercase();
                (start, pairs(COMMANDS.iter().filter(|c| c.starts_with(&current))))
            }
            ([.., prev, current], true) => {
                let start = pos - current.len();
                let current = current.to_lowercase();
                match get_sub_commands(&prev.to_lowercase()) {
                    Some(subs) => (start, pairs(subs.iter().filter(|s| s.starts_with(&current)))),
                    None => (pos, vec![]),
                }
            }
            ([.., last], false) => match get_sub_commands(&last.to_lowercase()) {
                Some(subs) => (pos, pairs(subs.iter())),
                None => (pos, vec![]),
            },
        }
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}
