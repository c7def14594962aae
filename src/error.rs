use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoPruneError {
    #[error(transparent)]
    Common(#[from] photo_prune_common::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("在庫ファイルの {line} 行目に {field} がありません: {path}")]
    MalformedRow {
        path: String,
        line: u64,
        field: &'static str,
    },

    #[error("CSV読み書きエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PhotoPruneError>;
