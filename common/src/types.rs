//! 在庫レコードの型定義
//!
//! ローカル在庫（端末バックアップ）とクラウド在庫で共有される型。
//! 列名はCSVのヘッダ（filename, creationTime, id）と一致させる。

use serde::{Deserialize, Serialize};

/// 在庫の1エントリ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// 元のファイル名（大文字小文字・拡張子はそのまま）
    #[serde(rename = "filename")]
    pub file_name: String,

    /// 撮影日時（ISO-8601、オフセット必須）
    pub creation_time: String,

    /// クラウド側の識別子（ローカル在庫では None）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Record {
    /// ローカル在庫のレコード
    pub fn local(file_name: impl Into<String>, creation_time: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            creation_time: creation_time.into(),
            id: None,
        }
    }

    /// クラウド在庫のレコード
    pub fn cloud(
        file_name: impl Into<String>,
        creation_time: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            creation_time: creation_time.into(),
            id: Some(id.into()),
        }
    }
}
