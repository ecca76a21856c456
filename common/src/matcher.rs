//! カタログ検索
//!
//! 名前付きフィールド（英題・ローマ字題・アーティスト・曲名）と
//! 別名リストを、それぞれ独立に部分一致で照合する。

use crate::query::Query;
use crate::types::{MatchField, Record, SongMatch, SongType};
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    static ref PUNCT_RE: Regex = Regex::new(r"[^a-zA-Z\d\s]+").unwrap();
}

/// 記号の連続を空白1文字に置き換える
///
/// `Re:Zero` → `Re Zero`、`K-ON!!` → `K ON `
pub fn clean_text(text: &str) -> Cow<'_, str> {
    PUNCT_RE.replace_all(text, " ")
}

/// 記号除去後の文字列に検索語が含まれるか（小文字比較）
fn contains_clean(haystack: &str, needle_lower: &str) -> bool {
    clean_text(haystack).to_lowercase().contains(needle_lower)
}

/// 記号除去後または元の文字列に検索語が含まれるか
fn contains_clean_or_raw(haystack: &str, needle_lower: &str) -> bool {
    contains_clean(haystack, needle_lower) || haystack.to_lowercase().contains(needle_lower)
}

/// 種別・番号フィルタを満たすか
fn passes_filters(
    record: &Record,
    song_type: Option<SongType>,
    type_number: Option<u32>,
) -> bool {
    if let Some(wanted) = song_type {
        if record.song_type != wanted {
            return false;
        }
    }
    if let Some(wanted) = type_number {
        if record.type_number != Some(wanted) {
            return false;
        }
    }
    true
}

/// レコード列を検索し、入力順に一致結果を返す
///
/// 1レコードにつき、名前付きフィールドで最大1件、別名で最大1件。
/// 両方一致した場合は同じレコードが2件返る（名前付きフィールドが先）。
///
/// # Examples
/// ```
/// use anisong_common::{search, MatchField, Record, SongType};
///
/// let mut record = Record::new("Sorairo Days", SongType::Opening);
/// record.anime_english_name = "Gurren Lagann".into();
///
/// let records = vec![record];
/// let matches = search(&records, "gurren", None, None);
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].field, MatchField::AnimeEnglishName);
/// ```
pub fn search<'a>(
    records: &'a [Record],
    term: &str,
    song_type: Option<SongType>,
    type_number: Option<u32>,
) -> Vec<SongMatch<'a>> {
    let needle = term.to_lowercase();
    let mut results = Vec::new();

    for record in records {
        let named = MatchField::NAMED
            .iter()
            .copied()
            .find(|&field| contains_clean_or_raw(record.field(field), &needle));

        if let Some(field) = named {
            // 一致したのにフィルタで外れたレコードは別名も見ない
            if !passes_filters(record, song_type, type_number) {
                continue;
            }
            results.push(SongMatch {
                record,
                field,
                text: record.field(field),
            });
        }

        let alt = record
            .alt_anime_names
            .iter()
            .find(|name| contains_clean(name, &needle));

        if let Some(name) = alt {
            if passes_filters(record, song_type, type_number) {
                results.push(SongMatch {
                    record,
                    field: MatchField::AltAnimeNames,
                    text: name.as_str(),
                });
            }
        }
    }

    results
}

/// パース済みクエリで検索
pub fn search_query<'a>(records: &'a [Record], query: &Query) -> Vec<SongMatch<'a>> {
    search(records, &query.term, query.song_type, query.type_number)
}

/// 同一レコードの重複一致を先頭の1件にまとめる
pub fn dedup_matches(matches: Vec<SongMatch<'_>>) -> Vec<SongMatch<'_>> {
    let mut deduped: Vec<SongMatch<'_>> = Vec::with_capacity(matches.len());
    for m in matches {
        let seen = deduped
            .iter()
            .any(|existing| std::ptr::eq(existing.record, m.record));
        if !seen {
            deduped.push(m);
        }
    }
    deduped
}
