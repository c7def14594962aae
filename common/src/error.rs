//! エラー型定義

use thiserror::Error;

/// 突合エンジンのエラー型
///
/// どのエラーも実行全体を中断する（部分的な結果は返さない）。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// タイムゾーン付き日時として解釈できない creationTime
    #[error("日時の形式が不正です: {file_name} (creationTime = {value:?})")]
    MalformedTimestamp { file_name: String, value: String },

    /// ローカル在庫が空（境界日時が定まらない）
    #[error("ローカル在庫が空です。境界日時を決定できません")]
    EmptyInventory,

    /// 必須フィールドが欠けたレコード
    #[error("レコードに {field} がありません: {file_name:?}")]
    MalformedRecord {
        file_name: String,
        field: &'static str,
    },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
