//! 在庫の突合
//!
//! クラウド在庫のうち、ローカル在庫に同じキーの写真がなく、
//! かつ境界日時以降に撮影されたものを削除候補として抽出する。

use crate::boundary::compute_boundary;
use crate::error::Result;
use crate::filter::is_eligible_extension;
use crate::normalize::{canonical_time, normalize, NormalizedKey};
use crate::types::Record;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// 突合の統計情報
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchStats {
    /// ローカル在庫の件数
    pub local_records: usize,
    /// クラウド在庫の件数
    pub cloud_records: usize,
    /// 拡張子で除外した件数
    pub skipped_extension: usize,
    /// 境界日時より前で除外した件数
    pub before_boundary: usize,
    /// ローカル在庫に一致した件数
    pub matched_local: usize,
    /// 削除候補の件数
    pub candidates: usize,
}

/// 突合結果
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// 削除候補（クラウド在庫の順序のまま、creationTimeは正規化済み）
    pub records: Vec<Record>,
    /// 統計情報
    pub stats: MatchStats,
    /// 境界日時
    pub boundary: DateTime<Utc>,
}

/// 削除候補のレコードを抽出する
///
/// 出力レコードは元のファイル名・正規化済みの creationTime・id を持つ。
/// 同じキーのクラウドレコードが複数あれば、それぞれ個別に判定する。
pub fn match_records(local: &[Record], cloud: &[Record]) -> Result<Vec<Record>> {
    Ok(match_with_stats(local, cloud)?.records)
}

/// 削除候補を統計情報付きで抽出する
pub fn match_with_stats(local: &[Record], cloud: &[Record]) -> Result<MatchOutcome> {
    let local_keys = local
        .iter()
        .map(normalize)
        .collect::<Result<HashSet<NormalizedKey>>>()?;
    let boundary = compute_boundary(local)?;

    let mut stats = MatchStats {
        local_records: local.len(),
        cloud_records: cloud.len(),
        ..Default::default()
    };
    let mut records = Vec::new();

    for record in cloud {
        if !is_eligible_extension(&record.file_name) {
            stats.skipped_extension += 1;
            continue;
        }

        let key = normalize(record)?;

        if key.instant < boundary {
            stats.before_boundary += 1;
        } else if local_keys.contains(&key) {
            stats.matched_local += 1;
        } else {
            records.push(Record {
                file_name: record.file_name.clone(),
                creation_time: canonical_time(&key.instant),
                id: record.id.clone(),
            });
        }
    }
    stats.candidates = records.len();

    Ok(MatchOutcome {
        records,
        stats,
        boundary,
    })
}
