//! 突合の実行
//!
//! 在庫CSVを読み込み、突合エンジンで削除候補を求めて書き出す。
//! 出力ファイルは突合が最後まで成功した場合にのみ作成する。

use crate::config::PipelinePaths;
use crate::error::Result;
use crate::inventory;
use photo_prune_common::{reconcile, Reconciliation};

/// 在庫ファイル同士を突合して削除候補CSVを書き出す
pub fn run_diff(paths: &PipelinePaths) -> Result<Reconciliation> {
    let local = inventory::read_local_inventory(&paths.local_inventory)?;
    let cloud = inventory::read_cloud_inventory(&paths.cloud_inventory)?;

    let result = reconcile(&local, &cloud)?;
    inventory::write_match_result(&paths.output, &result.records)?;

    Ok(result)
}

/// 端末エクスポートをローカル在庫CSVに変換する
pub fn run_convert(paths: &PipelinePaths) -> Result<usize> {
    crate::shortcut::convert_shortcut_export(&paths.shortcut_export, &paths.local_inventory)
}
