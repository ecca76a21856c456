//! 検索〜一覧表示〜選択の流れ
//!
//! 入出力（標準入出力・ブラウザ）は main 側で行い、
//! ここでは書き込み先を受け取って結果を整形する。

use crate::selector::Selection;
use anisong_common::{dedup_matches, format_match_list, parse_query, video_url, Catalog, SongMatch};
use std::io::{self, Write};

/// 生の入力文字列でカタログを検索
pub fn run_query<'a>(catalog: &'a Catalog, input: &str, unique: bool) -> Vec<SongMatch<'a>> {
    let query = parse_query(input);
    tracing::debug!(
        term = %query.term,
        song_type = ?query.song_type,
        type_number = ?query.type_number,
        filtered = query.has_filters(),
        "query parsed"
    );

    let matches = catalog.search(&query);
    tracing::debug!(count = matches.len(), "search finished");
    for m in &matches {
        tracing::trace!(field = %m.field, text = m.text, "matched");
    }

    if unique {
        dedup_matches(matches)
    } else {
        matches
    }
}

/// 一覧を出力（0件なら「見つからない」メッセージ）
pub fn print_results<W: Write>(out: &mut W, matches: &[SongMatch<'_>]) -> io::Result<()> {
    if matches.is_empty() {
        writeln!(out, "No matching results found.")?;
        return Ok(());
    }

    writeln!(out, "\nMatching Animes:")?;
    for line in format_match_list(matches) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// 選択結果の処理内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// 開く動画URL
    Video(String),
    /// 選択されたが動画パスがない
    NoVideo,
    /// 入力が不正（メッセージを表示して終了）
    Rejected(&'static str),
}

/// 選択番号から開くURLを決定
pub fn resolve_choice(matches: &[SongMatch<'_>], selection: Selection, base_url: &str) -> Choice {
    match selection {
        Selection::Chosen(idx) => match matches.get(idx) {
            Some(m) => match video_url(base_url, m.record) {
                Some(url) => Choice::Video(url),
                None => Choice::NoVideo,
            },
            None => Choice::Rejected("Invalid selection."),
        },
        other => Choice::Rejected(other.message().unwrap_or("Invalid selection.")),
    }
}
