//! 拡張子フィルタ
//!
//! クラウド在庫には動画などの写真以外の素材も含まれるため、
//! 削除候補の対象を画像拡張子に限定する。ローカル在庫には適用しない。

use crate::normalize::extension;

/// 削除候補にしてよい拡張子（小文字・ドットなし）
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpeg", "jpg", "heic", "png"];

/// 対象の画像拡張子か判定（大文字小文字は区別しない）
pub fn is_eligible_extension(file_name: &str) -> bool {
    extension(file_name)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}
