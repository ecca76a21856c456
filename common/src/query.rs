//! 検索クエリのパーサー
//!
//! 末尾の `op2` / `ed` / `ins1` のような種別トークンを取り出し、
//! 検索語とフィルタに分解する。

use crate::types::SongType;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // 先頭は最短一致、空白は最長一致（区切りの空白はすべて group 2 に入る）
    static ref SUFFIX_RE: Regex = Regex::new(r"(?i)^(.*?)(\s+)(op|ed|ins)([0-9]*)$").unwrap();
}

/// パース済みクエリ
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    /// 種別トークンを除いた検索語
    pub term: String,
    pub song_type: Option<SongType>,
    pub type_number: Option<u32>,
}

impl Query {
    /// フィルタなしのクエリ
    pub fn plain(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            song_type: None,
            type_number: None,
        }
    }

    pub fn has_filters(&self) -> bool {
        self.song_type.is_some() || self.type_number.is_some()
    }
}

/// 入力文字列をクエリに分解
///
/// 末尾トークンの直前の空白は1文字だけ取り除く。
/// 2文字以上の空白で区切られていた場合、残りは検索語の末尾に残る。
///
/// # Examples
/// ```
/// use anisong_common::{parse_query, SongType};
///
/// let query = parse_query("Naruto op2");
/// assert_eq!(query.term, "Naruto");
/// assert_eq!(query.song_type, Some(SongType::Opening));
/// assert_eq!(query.type_number, Some(2));
/// ```
pub fn parse_query(input: &str) -> Query {
    let Some(caps) = SUFFIX_RE.captures(input) else {
        return Query::plain(input);
    };

    let head = &caps[1];
    let gap = &caps[2];
    let digits = &caps[4];

    let type_number = if digits.is_empty() {
        None
    } else {
        match digits.parse::<u32>() {
            Ok(n) => Some(n),
            // u32 に収まらない番号はトークン扱いしない
            Err(_) => return Query::plain(input),
        }
    };

    let song_type = SongType::from_token(&caps[3]);

    // 空白のうち最後の1文字だけ落とす
    let mut term = String::with_capacity(head.len() + gap.len());
    term.push_str(head);
    let mut gap_chars = gap.chars();
    gap_chars.next_back();
    term.push_str(gap_chars.as_str());

    Query {
        term,
        song_type,
        type_number,
    }
}
