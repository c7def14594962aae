//! 境界日時の算出
//!
//! ローカルバックアップがカバーする最も古い日時。これより前のクラウド写真は
//! バックアップ対象期間外とみなし、削除候補から外す。

use crate::error::{Error, Result};
use crate::normalize::normalize;
use crate::types::Record;
use chrono::{DateTime, Utc};

/// ローカル在庫の最古の撮影日時（UTC・秒単位）
///
/// # Errors
/// * `EmptyInventory` - ローカル在庫が空
/// * レコードの日時が不正な場合はそのエラー
pub fn compute_boundary(local: &[Record]) -> Result<DateTime<Utc>> {
    let mut boundary: Option<DateTime<Utc>> = None;

    for record in local {
        let instant = normalize(record)?.instant;
        boundary = Some(match boundary {
            Some(current) => current.min(instant),
            None => instant,
        });
    }

    boundary.ok_or(Error::EmptyInventory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_empty_inventory() {
        assert_eq!(compute_boundary(&[]), Err(Error::EmptyInventory));
    }

    #[test]
    fn test_minimum_across_offsets() {
        let local = vec![
            Record::local("b.jpg", "2024-03-01T00:00:00Z"),
            // UTCでは 2024-01-01T05:00:00Z
            Record::local("a.jpg", "2024-01-01T00:00:00-05:00"),
            Record::local("c.jpg", "2024-01-01T06:00:00+00:00"),
        ];
        assert_eq!(
            compute_boundary(&local).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 1, 5, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_malformed_local_record_aborts() {
        let local = vec![
            Record::local("a.jpg", "2024-01-01T00:00:00Z"),
            Record::local("b.jpg", "not a date"),
        ];
        assert!(matches!(
            compute_boundary(&local),
            Err(Error::MalformedTimestamp { .. })
        ));
    }
}
