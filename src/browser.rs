use crate::error::{AnisongError, Result};

/// 既定のブラウザでURLを開く
pub fn open_url(url: &str) -> Result<()> {
    tracing::info!(%url, "opening video in browser");
    open::that(url).map_err(|e| AnisongError::Browser(format!("{}: {}", url, e)))
}
