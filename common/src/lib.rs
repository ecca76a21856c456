//! Anisong Common Library
//!
//! 楽曲カタログの型・クエリパーサー・検索・表示整形

pub mod types;
pub mod error;
pub mod query;
pub mod matcher;
pub mod format;
pub mod catalog;

pub use types::{MatchField, Record, SongMatch, SongType};
pub use error::{Error, Result};
pub use query::{parse_query, Query};
pub use matcher::{clean_text, dedup_matches, search, search_query};
pub use format::{format_match_line, format_match_list, join_url, video_url, DEFAULT_BASE_URL};
pub use catalog::Catalog;
