use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnisongError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("カタログファイルが見つかりません: {0}")]
    CatalogNotFound(String),

    #[error("カタログファイルが不正: {0}")]
    InvalidCatalog(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("ブラウザを起動できません: {0}")]
    Browser(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnisongError>;
