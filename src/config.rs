use crate::error::{AnisongError, Result};
use anisong_common::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// カタログJSONのパス（相対パスはカレントディレクトリ基準）
    pub catalog_path: PathBuf,
    /// 動画配信のベースURL
    pub base_url: String,
    /// 選択時にブラウザを開くか
    pub open_browser: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("songs.json"),
            base_url: DEFAULT_BASE_URL.into(),
            open_browser: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（存在しなければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| AnisongError::Config(format!("{}: {}", path.display(), e)))?;
            tracing::debug!(path = %path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AnisongError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("anisong").join("config.json"))
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        let trimmed = url.trim();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(AnisongError::Config(format!(
                "ベースURLは http:// または https:// で始めてください: {}",
                url
            )));
        }
        self.base_url = trimmed.to_string();
        Ok(())
    }
}
