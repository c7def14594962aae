use crate::error::{PhotoPruneError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 永続化される設定（`~/.config/photo-prune/config.json`）
///
/// ファイル名が相対パスの場合は `data_dir` からの相対とみなす。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: PathBuf,
    pub shortcut_export: PathBuf,
    pub local_inventory: PathBuf,
    pub cloud_inventory: PathBuf,
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            shortcut_export: PathBuf::from("01_iphone_export.txt"),
            local_inventory: PathBuf::from("01x_iphone_photos.csv"),
            cloud_inventory: PathBuf::from("02x_google_photos.csv"),
            output: PathBuf::from("03x_photos_to_delete.csv"),
        }
    }
}

/// コマンドラインで指定されたパス（設定より優先）
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub shortcut_export: Option<PathBuf>,
    pub local_inventory: Option<PathBuf>,
    pub cloud_inventory: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// 解決済みの入出力パス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelinePaths {
    pub shortcut_export: PathBuf,
    pub local_inventory: PathBuf,
    pub cloud_inventory: PathBuf,
    pub output: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PhotoPruneError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("photo-prune").join("config.json"))
    }

    pub fn set_data_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.data_dir = dir;
        self.save()
    }

    /// 設定とコマンドライン指定から入出力パスを決定する
    pub fn resolve(&self, overrides: PathOverrides) -> PipelinePaths {
        PipelinePaths {
            shortcut_export: overrides
                .shortcut_export
                .unwrap_or_else(|| self.in_data_dir(&self.shortcut_export)),
            local_inventory: overrides
                .local_inventory
                .unwrap_or_else(|| self.in_data_dir(&self.local_inventory)),
            cloud_inventory: overrides
                .cloud_inventory
                .unwrap_or_else(|| self.in_data_dir(&self.cloud_inventory)),
            output: overrides
                .output
                .unwrap_or_else(|| self.in_data_dir(&self.output)),
        }
    }

    fn in_data_dir(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }
}
