//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid songType: {0} (expected 1=OP, 2=ED, 3=INS)")]
    InvalidSongType(u8),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
