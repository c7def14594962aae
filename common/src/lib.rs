//! Photo Prune Common Library
//!
//! 端末バックアップ（ローカル在庫）とクラウド写真ライブラリ（クラウド在庫）を
//! 突合し、削除してよいクラウド写真を抽出するエンジン。
//! ファイル・ネットワーク入出力は持たない。
//!
//! ## 処理フロー
//! 1. ファイル名・撮影日時を比較キーに正規化
//! 2. クラウド在庫を画像拡張子に限定
//! 3. ローカル在庫の最古日時（境界）を算出
//! 4. 境界以降でローカルに一致しないクラウド写真を抽出
//! 5. 撮影日時の昇順に安定ソート

pub mod types;
pub mod error;
pub mod normalize;
pub mod filter;
pub mod boundary;
pub mod matcher;
pub mod emit;

pub use types::Record;
pub use error::{Error, Result};
pub use normalize::{normalize, NormalizedKey};
pub use filter::{is_eligible_extension, ALLOWED_EXTENSIONS};
pub use boundary::compute_boundary;
pub use matcher::{match_records, match_with_stats, MatchOutcome, MatchStats};
pub use emit::emit;

use chrono::{DateTime, Utc};

/// 突合結果（並び替え済み）
#[derive(Debug, Clone)]
pub struct Reconciliation {
    /// 撮影日時の昇順に並んだ削除候補
    pub records: Vec<Record>,
    /// 統計情報
    pub stats: MatchStats,
    /// 境界日時
    pub boundary: DateTime<Utc>,
}

/// ローカル在庫とクラウド在庫を突合し、削除候補を撮影日時順に返す
///
/// 途中でエラーが起きた場合は候補を一切返さない。
///
/// # Examples
/// ```
/// use photo_prune_common::{reconcile, Record};
///
/// let local = vec![Record::local("a.jpg", "2024-01-01T00:00:00Z")];
/// let cloud = vec![
///     Record::cloud("a.jpg", "2024-01-01T00:00:00Z", "id1"),
///     Record::cloud("b.png", "2023-12-31T00:00:00Z", "id2"),
///     Record::cloud("c.heic", "2024-02-01T00:00:00Z", "id3"),
/// ];
///
/// let result = reconcile(&local, &cloud).unwrap();
/// assert_eq!(result.records, vec![Record::cloud("c.heic", "2024-02-01T00:00:00Z", "id3")]);
/// ```
pub fn reconcile(local: &[Record], cloud: &[Record]) -> Result<Reconciliation> {
    let outcome = match_with_stats(local, cloud)?;
    let records: Vec<Record> = emit(outcome.records)?.collect();

    tracing::debug!(
        boundary = %normalize::canonical_time(&outcome.boundary),
        local = outcome.stats.local_records,
        cloud = outcome.stats.cloud_records,
        skipped_extension = outcome.stats.skipped_extension,
        before_boundary = outcome.stats.before_boundary,
        matched_local = outcome.stats.matched_local,
        candidates = outcome.stats.candidates,
        "reconciliation finished"
    );

    Ok(Reconciliation {
        records,
        stats: outcome.stats,
        boundary: outcome.boundary,
    })
}
