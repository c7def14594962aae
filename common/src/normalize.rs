//! 比較キーへの正規化
//!
//! ファイル名と撮影日時の表記揺れ（大文字小文字・拡張子・タイムゾーン・
//! 秒未満の精度）を吸収して、両在庫で比較可能なキーを作る。

use crate::error::{Error, Result};
use crate::types::Record;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

/// RFC 3339 で解釈できなかった場合に試すフォーマット（`+0900` 形式のオフセット等）
const FALLBACK_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// 在庫間の同一性判定に使うキー
///
/// `(base_name, instant)` が等しければ、元のファイル名やオフセットが
/// 異なっていても同じ写真とみなす。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedKey {
    /// 拡張子を除き小文字化したファイル名
    pub base_name: String,
    /// UTC・秒単位に切り捨てた撮影日時
    pub instant: DateTime<Utc>,
}

/// レコードを比較キーに正規化する
///
/// # Errors
/// * `MalformedRecord` - filename / creationTime が空
/// * `MalformedTimestamp` - creationTime がタイムゾーン付き日時でない
pub fn normalize(record: &Record) -> Result<NormalizedKey> {
    if record.file_name.is_empty() {
        return Err(Error::MalformedRecord {
            file_name: record.file_name.clone(),
            field: "filename",
        });
    }

    Ok(NormalizedKey {
        base_name: base_name(&record.file_name),
        instant: record_instant(record)?,
    })
}

/// レコードの撮影日時をUTC・秒単位で取得する
pub fn record_instant(record: &Record) -> Result<DateTime<Utc>> {
    if record.creation_time.is_empty() {
        return Err(Error::MalformedRecord {
            file_name: record.file_name.clone(),
            field: "creationTime",
        });
    }

    parse_instant(&record.creation_time).ok_or_else(|| Error::MalformedTimestamp {
        file_name: record.file_name.clone(),
        value: record.creation_time.clone(),
    })
}

/// タイムゾーン付きISO-8601日時をUTCに変換し、秒未満を切り捨てる
///
/// オフセットのない日時は `None`（UTCとはみなさない）。
///
/// # Examples
/// ```
/// use photo_prune_common::normalize::parse_instant;
///
/// let a = parse_instant("2024-01-01T10:00:00-05:00").unwrap();
/// let b = parse_instant("2024-01-01T15:00:00.999Z").unwrap();
/// assert_eq!(a, b);
/// assert!(parse_instant("2024-01-01T10:00:00").is_none());
/// ```
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    DateTime::parse_from_rfc3339(value)
        .ok()
        .or_else(|| {
            FALLBACK_FORMATS
                .iter()
                .find_map(|format| DateTime::parse_from_str(value, format).ok())
        })
        .map(|dt| dt.with_timezone(&Utc).trunc_subsecs(0))
}

/// 正規化済み日時の出力表記（`2024-01-01T00:00:00Z`）
pub fn canonical_time(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// 拡張子を除いて小文字化したファイル名
pub fn base_name(file_name: &str) -> String {
    split_extension(file_name).0.to_lowercase()
}

/// 小文字化した拡張子（ドットなし）
pub fn extension(file_name: &str) -> Option<String> {
    split_extension(file_name).1.map(str::to_lowercase)
}

/// 最後の `.` で分割する
///
/// 先頭から続くドットは拡張子の区切りとみなさない（`.hidden` は拡張子なし）。
fn split_extension(file_name: &str) -> (&str, Option<&str>) {
    match file_name.rfind('.') {
        Some(idx) if file_name[..idx].chars().any(|c| c != '.') => {
            (&file_name[..idx], Some(&file_name[idx + 1..]))
        }
        _ => (file_name, None),
    }
}
