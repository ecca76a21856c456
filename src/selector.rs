//! 対話入力モジュール
//!
//! 検索語の入力と、一覧からの番号選択

use crate::error::{AnisongError, Result};
use console::Term;
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};

/// 番号入力の判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 選択された結果（0始まりのインデックス）
    Chosen(usize),
    /// 数値ではない
    NotANumber,
    /// 範囲外
    OutOfRange,
}

impl Selection {
    /// ユーザー向けメッセージ（Chosen は None）
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Selection::Chosen(_) => None,
            Selection::NotANumber => Some("Please input number."),
            Selection::OutOfRange => Some("Invalid selection."),
        }
    }
}

/// 入力文字列を1始まりの番号として解釈
///
/// 整数として読めれば桁数に関係なく範囲判定に回す（巨大な数は範囲外）。
pub fn resolve_selection(input: &str, count: usize) -> Selection {
    let trimmed = input.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Selection::NotANumber;
    }
    if negative {
        return Selection::OutOfRange;
    }

    match digits.parse::<usize>() {
        Ok(n) if n >= 1 && n <= count => Selection::Chosen(n - 1),
        _ => Selection::OutOfRange,
    }
}

/// 端末で対話できるか（dialoguer は stderr が端末でないと使えない）
fn is_interactive() -> bool {
    Term::stderr().is_term() && io::stdin().is_terminal()
}

/// パイプ入力などから1行読む（EOF は空文字列）
pub fn read_line_from<R: BufRead>(reader: &mut R, prompt: &str) -> Result<String> {
    eprint!("{}: ", prompt);
    io::stderr().flush().ok();

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn prompt_line(prompt: &str) -> Result<String> {
    if !is_interactive() {
        tracing::debug!("stdin is not a terminal, reading line directly");
        return read_line_from(&mut io::stdin().lock(), prompt);
    }

    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| AnisongError::Prompt(e.to_string()))
}

/// 検索語を入力
pub fn prompt_search_term() -> Result<String> {
    prompt_line("Enter search term")
}

/// 一覧から番号を選択
pub fn prompt_selection(count: usize) -> Result<Selection> {
    let input = prompt_line("Select a number to view its video")?;
    Ok(resolve_selection(&input, count))
}
