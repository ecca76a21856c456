//! 一覧表示と動画URLの組み立て

use crate::types::{Record, SongMatch};

/// 既定の動画配信ベースURL
pub const DEFAULT_BASE_URL: &str = "https://naedist.animemusicquiz.com/";

/// 一覧の1行を生成（index は1始まり）
///
/// `1. Evangelion (Cruel Angel's Thesis) - OP 1`
/// 番号がない場合は種別ラベルで行が終わる。
pub fn format_match_line(index: usize, m: &SongMatch<'_>) -> String {
    let record = m.record;
    let kind = match record.type_number {
        Some(n) => format!("{} {}", record.song_type, n),
        None => record.song_type.label().to_string(),
    };
    format!("{}. {} ({}) - {}", index, m.text, record.song_name, kind)
}

/// 一覧全体を生成
pub fn format_match_list(matches: &[SongMatch<'_>]) -> Vec<String> {
    matches
        .iter()
        .enumerate()
        .map(|(i, m)| format_match_line(i + 1, m))
        .collect()
}

/// ベースURLと相対パスを連結
///
/// ベースURL末尾の `/` の有無、パス先頭の `/` の有無を吸収する。
pub fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

/// レコードの動画URL（720p優先、なければ480p）
pub fn video_url(base_url: &str, record: &Record) -> Option<String> {
    record.video_path().map(|path| join_url(base_url, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MatchField, SongType};

    fn evangelion() -> Record {
        let mut record = Record::new("Cruel Angel's Thesis", SongType::Opening);
        record.anime_english_name = "Evangelion".into();
        record.type_number = Some(1);
        record.video_720 = Some("a.mp4".into());
        record
    }

    #[test]
    fn test_format_match_line() {
        let record = evangelion();
        let m = SongMatch {
            record: &record,
            field: MatchField::AnimeEnglishName,
            text: &record.anime_english_name,
        };
        assert_eq!(
            format_match_line(1, &m),
            "1. Evangelion (Cruel Angel's Thesis) - OP 1"
        );
    }

    #[test]
    fn test_format_match_line_without_number() {
        let mut record = Record::new("Insert Song", SongType::Insert);
        record.song_artist = "Someone".into();
        let m = SongMatch {
            record: &record,
            field: MatchField::SongArtist,
            text: &record.song_artist,
        };
        assert_eq!(format_match_line(3, &m), "3. Someone (Insert Song) - IN");
    }

    #[test]
    fn test_format_match_list_numbering() {
        let record = evangelion();
        let m = SongMatch {
            record: &record,
            field: MatchField::SongName,
            text: &record.song_name,
        };
        let lines = format_match_list(&[m, m]);
        assert!(lines[0].starts_with("1. "));
        assert!(lines[1].starts_with("2. "));
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://host/", "a.mp4"), "https://host/a.mp4");
        assert_eq!(join_url("https://host", "a.mp4"), "https://host/a.mp4");
        assert_eq!(join_url("https://host/", "/a.mp4"), "https://host/a.mp4");
    }

    #[test]
    fn test_video_url() {
        let record = evangelion();
        assert_eq!(
            video_url(DEFAULT_BASE_URL, &record).as_deref(),
            Some("https://naedist.animemusicquiz.com/a.mp4")
        );

        let bare = Record::new("no video", SongType::Ending);
        assert_eq!(video_url(DEFAULT_BASE_URL, &bare), None);
    }
}
