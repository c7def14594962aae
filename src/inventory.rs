//! 在庫CSVの読み書き
//!
//! - ローカル在庫: `filename,creationTime`
//! - クラウド在庫: `filename,creationTime,id`
//! - 削除候補: `filename,creationTime,id`（撮影日時の昇順）
//!
//! 列はヘッダ名ではなく位置で解釈する。

use crate::error::{PhotoPruneError, Result};
use photo_prune_common::Record;
use std::path::Path;

const LOCAL_COLUMNS: &[&str] = &["filename", "creationTime"];
const CLOUD_COLUMNS: &[&str] = &["filename", "creationTime", "id"];

/// ローカル在庫CSVを読み込む
pub fn read_local_inventory(path: &Path) -> Result<Vec<Record>> {
    let rows = read_rows(path, LOCAL_COLUMNS)?;
    Ok(rows
        .into_iter()
        .map(|mut row| {
            let creation_time = row.pop().unwrap_or_default();
            let file_name = row.pop().unwrap_or_default();
            Record::local(file_name, creation_time)
        })
        .collect())
}

/// クラウド在庫CSVを読み込む
pub fn read_cloud_inventory(path: &Path) -> Result<Vec<Record>> {
    let rows = read_rows(path, CLOUD_COLUMNS)?;
    Ok(rows
        .into_iter()
        .map(|mut row| {
            let id = row.pop().unwrap_or_default();
            let creation_time = row.pop().unwrap_or_default();
            let file_name = row.pop().unwrap_or_default();
            Record::cloud(file_name, creation_time, id)
        })
        .collect())
}

/// 削除候補CSVを書き出す（渡された順序のまま）
pub fn write_match_result(path: &Path, records: &[Record]) -> Result<()> {
    write_rows(path, CLOUD_COLUMNS, records.iter().map(|r| {
        vec![
            r.file_name.as_str(),
            r.creation_time.as_str(),
            r.id.as_deref().unwrap_or(""),
        ]
    }))
}

/// ローカル在庫CSVを書き出す
pub fn write_local_inventory(path: &Path, records: &[Record]) -> Result<()> {
    write_rows(path, LOCAL_COLUMNS, records.iter().map(|r| {
        vec![r.file_name.as_str(), r.creation_time.as_str()]
    }))
}

/// ヘッダ行を読み飛ばし、必須列がすべて揃った行だけを返す
fn read_rows(path: &Path, columns: &[&'static str]) -> Result<Vec<Vec<String>>> {
    if !path.exists() {
        return Err(PhotoPruneError::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        let mut values = Vec::with_capacity(columns.len());
        for (index, &field) in columns.iter().enumerate() {
            match row.get(index) {
                Some(value) if !value.trim().is_empty() => values.push(value.to_string()),
                _ => {
                    return Err(PhotoPruneError::MalformedRow {
                        path: path.display().to_string(),
                        line,
                        field,
                    })
                }
            }
        }
        rows.push(values);
    }

    tracing::debug!(path = %path.display(), rows = rows.len(), "inventory loaded");
    Ok(rows)
}

fn write_rows<'a>(
    path: &Path,
    header: &[&str],
    rows: impl Iterator<Item = Vec<&'a str>>,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(header)?;

    let mut count = 0usize;
    for row in rows {
        writer.write_record(&row)?;
        count += 1;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = count, "inventory written");
    Ok(())
}
