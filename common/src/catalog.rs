//! 楽曲カタログ
//!
//! 起動時に一度だけ読み込み、以降は変更しない。

use crate::error::Result;
use crate::query::Query;
use crate::types::{Record, SongMatch};

/// 読み込み済みのレコード集合
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// JSON配列文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// クエリで検索
    pub fn search(&self, query: &Query) -> Vec<SongMatch<'_>> {
        crate::matcher::search_query(&self.records, query)
    }
}
