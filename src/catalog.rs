use crate::error::{AnisongError, Result};
use anisong_common::Catalog;
use std::path::Path;

/// カタログJSONを読み込む
///
/// ファイルがない・JSONが不正な場合はエラー（起動時の致命的エラー）。
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(AnisongError::CatalogNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let catalog = Catalog::from_json(&content)
        .map_err(|e| AnisongError::InvalidCatalog(format!("{}: {}", path.display(), e)))?;

    tracing::debug!(path = %path.display(), records = catalog.len(), "catalog loaded");
    Ok(catalog)
}
