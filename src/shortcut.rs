//! 端末エクスポートの変換
//!
//! iPhoneショートカットが書き出すテキストをローカル在庫CSVに変換する。
//!
//! ```text
//! ---filenames---
//! IMG_0001.HEIC
//! IMG_0002.JPG
//! ---creationTimes---
//! 2024-01-01T10:00:00+09:00
//! 2024-01-01T10:05:00+09:00
//! ```
//!
//! n番目のファイル名とn番目の撮影日時を組にする。

use crate::error::{PhotoPruneError, Result};
use crate::inventory;
use photo_prune_common::Record;
use regex::Regex;
use std::path::Path;

/// エクスポート内のセクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    FileNames,
    CreationTimes,
    Unknown,
}

impl Section {
    fn from_marker(name: &str) -> Self {
        match name {
            "filenames" => Section::FileNames,
            "creationTimes" => Section::CreationTimes,
            _ => Section::Unknown,
        }
    }
}

/// セクション見出し行ならセクション名を返す
fn section_marker(line: &str) -> Option<&str> {
    lazy_static::lazy_static! {
        static ref MARKER_RE: Regex = Regex::new(r"^-{3,}\s*([^-\s]*)\s*-*$").unwrap();
    }

    MARKER_RE
        .captures(line)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// エクスポートテキストをローカル在庫のレコードに変換する
///
/// 件数が揃わない場合は余りを捨てて警告を出す。
pub fn parse_shortcut_export(content: &str) -> Vec<Record> {
    let mut file_names = Vec::new();
    let mut creation_times = Vec::new();
    let mut section = None;

    for line in content.lines() {
        let line = line.trim();

        if let Some(name) = section_marker(line) {
            section = Some(Section::from_marker(name));
            continue;
        }

        if line.is_empty() {
            continue;
        }

        match section {
            Some(Section::FileNames) => file_names.push(line),
            Some(Section::CreationTimes) => creation_times.push(line),
            Some(Section::Unknown) | None => {}
        }
    }

    if file_names.len() != creation_times.len() {
        tracing::warn!(
            file_names = file_names.len(),
            creation_times = creation_times.len(),
            "filename and creationTime counts differ, surplus entries dropped"
        );
    }

    file_names
        .into_iter()
        .zip(creation_times)
        .map(|(file_name, creation_time)| Record::local(file_name, creation_time))
        .collect()
}

/// エクスポートファイルを読み込んでローカル在庫CSVに書き出す
///
/// # Returns
/// 書き出したレコード数
pub fn convert_shortcut_export(input: &Path, output: &Path) -> Result<usize> {
    if !input.exists() {
        return Err(PhotoPruneError::FileNotFound(input.display().to_string()));
    }

    let content = std::fs::read_to_string(input)?;
    let records = parse_shortcut_export(&content);
    inventory::write_local_inventory(output, &records)?;

    Ok(records.len())
}
