//! 削除候補の並び替え

use crate::error::Result;
use crate::normalize::record_instant;
use crate::types::Record;

/// 撮影日時の昇順に安定ソートして、一度だけ消費できるイテレータを返す
///
/// 同時刻のレコードは入力順を保つため、同じ入力からは常に同じ出力になる。
pub fn emit(records: Vec<Record>) -> Result<std::vec::IntoIter<Record>> {
    let mut keyed = records
        .into_iter()
        .map(|record| -> Result<_> { Ok((record_instant(&record)?, record)) })
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by_key(|(instant, _)| *instant);

    Ok(keyed
        .into_iter()
        .map(|(_, record)| record)
        .collect::<Vec<_>>()
        .into_iter())
}
