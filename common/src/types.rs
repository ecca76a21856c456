//! カタログの型定義
//!
//! - SongType: 楽曲種別（OP/ED/挿入歌）
//! - Record: songs.json の1エントリ
//! - MatchField / SongMatch: 検索結果（どのフィールドで一致したか）

use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 楽曲種別
///
/// JSON上は数値（1=Opening, 2=Ending, 3=Insert）で表現される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SongType {
    Opening,
    Ending,
    Insert,
}

impl SongType {
    /// 一覧表示用の短縮ラベル
    pub fn label(&self) -> &'static str {
        match self {
            SongType::Opening => "OP",
            SongType::Ending => "ED",
            SongType::Insert => "IN",
        }
    }

    /// クエリ末尾トークン（op/ed/ins）から変換
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "op" => Some(SongType::Opening),
            "ed" => Some(SongType::Ending),
            "ins" => Some(SongType::Insert),
            _ => None,
        }
    }
}

impl TryFrom<u8> for SongType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SongType::Opening),
            2 => Ok(SongType::Ending),
            3 => Ok(SongType::Insert),
            other => Err(Error::InvalidSongType(other)),
        }
    }
}

impl From<SongType> for u8 {
    fn from(value: SongType) -> Self {
        match value {
            SongType::Opening => 1,
            SongType::Ending => 2,
            SongType::Insert => 3,
        }
    }
}

impl fmt::Display for SongType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `null` を既定値（空文字列・空リスト）として読む
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// カタログの1エントリ
///
/// `songName` と `songType` 以外は欠けていても空扱いで読み込む。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default, deserialize_with = "null_as_default")]
    pub anime_english_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub anime_romaji_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub song_artist: String,

    pub song_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub alt_anime_names: Vec<String>,

    pub song_type: SongType,

    #[serde(default)]
    pub type_number: Option<u32>,

    #[serde(default, rename = "video720")]
    pub video_720: Option<String>,

    #[serde(default, rename = "video480")]
    pub video_480: Option<String>,
}

impl Record {
    /// 最小構成のレコード（テスト・組み立て用）
    pub fn new(song_name: impl Into<String>, song_type: SongType) -> Self {
        Self {
            anime_english_name: String::new(),
            anime_romaji_name: String::new(),
            song_artist: String::new(),
            song_name: song_name.into(),
            alt_anime_names: Vec::new(),
            song_type,
            type_number: None,
            video_720: None,
            video_480: None,
        }
    }

    /// 名前付きフィールドの値を取得
    pub fn field(&self, field: MatchField) -> &str {
        match field {
            MatchField::AnimeEnglishName => &self.anime_english_name,
            MatchField::AnimeRomajiName => &self.anime_romaji_name,
            MatchField::SongArtist => &self.song_artist,
            MatchField::SongName => &self.song_name,
            // 別名はリストなので先頭を代表値とする
            MatchField::AltAnimeNames => self
                .alt_anime_names
                .first()
                .map(String::as_str)
                .unwrap_or(""),
        }
    }

    /// 再生に使う動画パス（720p優先、空なら480p）
    pub fn video_path(&self) -> Option<&str> {
        [self.video_720.as_deref(), self.video_480.as_deref()]
            .into_iter()
            .flatten()
            .find(|path| !path.trim().is_empty())
    }
}

/// 一致したフィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchField {
    AnimeEnglishName,
    AnimeRomajiName,
    SongArtist,
    SongName,
    AltAnimeNames,
}

impl MatchField {
    /// 検索順（この順で最初に一致したものを採用）
    pub const NAMED: [MatchField; 4] = [
        MatchField::AnimeEnglishName,
        MatchField::AnimeRomajiName,
        MatchField::SongArtist,
        MatchField::SongName,
    ];

    /// JSON上のフィールド名
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchField::AnimeEnglishName => "animeEnglishName",
            MatchField::AnimeRomajiName => "animeRomajiName",
            MatchField::SongArtist => "songArtist",
            MatchField::SongName => "songName",
            MatchField::AltAnimeNames => "altAnimeNames",
        }
    }
}

impl fmt::Display for MatchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 検索結果1件
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SongMatch<'a> {
    pub record: &'a Record,
    pub field: MatchField,
    /// 一致したテキスト（別名一致の場合は一致した別名そのもの）
    pub text: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserialize_full() {
        let json = r#"{
            "animeEnglishName": "Attack on Titan",
            "animeRomajiName": "Shingeki no Kyojin",
            "songArtist": "Linked Horizon",
            "songName": "Guren no Yumiya",
            "altAnimeNames": ["AoT", "SnK"],
            "songType": 1,
            "typeNumber": 1,
            "video720": "abc.webm",
            "video480": "abc480.webm"
        }"#;

        let record: Record = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.anime_english_name, "Attack on Titan");
        assert_eq!(record.alt_anime_names, vec!["AoT", "SnK"]);
        assert_eq!(record.song_type, SongType::Opening);
        assert_eq!(record.type_number, Some(1));
        assert_eq!(record.video_720.as_deref(), Some("abc.webm"));
    }

    #[test]
    fn test_record_deserialize_missing_fields() {
        let json = r#"{"songName": "Only Name", "songType": 3}"#;

        let record: Record = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.anime_english_name, "");
        assert!(record.alt_anime_names.is_empty());
        assert_eq!(record.song_type, SongType::Insert);
        assert_eq!(record.type_number, None);
        assert_eq!(record.video_path(), None);
    }

    #[test]
    fn test_record_deserialize_null_type_number() {
        let json = r#"{"songName": "x", "songType": 2, "typeNumber": null}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.type_number, None);
    }

    #[test]
    fn test_record_deserialize_null_text_fields() {
        let json = r#"{
            "songName": "x",
            "songType": 1,
            "animeEnglishName": null,
            "animeRomajiName": null,
            "songArtist": null,
            "altAnimeNames": null
        }"#;
        let record: Record = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.anime_english_name, "");
        assert_eq!(record.anime_romaji_name, "");
        assert_eq!(record.song_artist, "");
        assert!(record.alt_anime_names.is_empty());
    }

    #[test]
    fn test_record_requires_song_type() {
        let json = r#"{"songName": "x"}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }

    #[test]
    fn test_record_rejects_unknown_song_type() {
        let json = r#"{"songName": "x", "songType": 7}"#;
        let err = serde_json::from_str::<Record>(json).unwrap_err();
        assert!(err.to_string().contains("7"));
    }

    #[test]
    fn test_video_path_fallback() {
        let mut record = Record::new("song", SongType::Opening);
        record.video_480 = Some("low.mp4".into());
        assert_eq!(record.video_path(), Some("low.mp4"));

        record.video_720 = Some("".into());
        assert_eq!(record.video_path(), Some("low.mp4"));

        record.video_720 = Some("high.mp4".into());
        assert_eq!(record.video_path(), Some("high.mp4"));
    }

    #[test]
    fn test_song_type_labels() {
        assert_eq!(SongType::Opening.label(), "OP");
        assert_eq!(SongType::Ending.label(), "ED");
        assert_eq!(SongType::Insert.label(), "IN");
        assert_eq!(SongType::from_token("INS"), Some(SongType::Insert));
        assert_eq!(SongType::from_token("xx"), None);
    }
}
