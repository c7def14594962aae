//! 在庫突合の統合テスト
//!
//! CSVファイルの読み込みから削除候補の書き出しまでを検証

use photo_prune_rust::config::PipelinePaths;
use photo_prune_rust::{inventory, pipeline};
use std::path::Path;
use tempfile::tempdir;

const LOCAL_CSV: &str = "filename,creationTime
IMG_0001.JPG,2024-01-01T10:00:00-05:00
IMG_0002.HEIC,2024-01-03T12:00:00.000+09:00
";

const CLOUD_CSV: &str = "filename,creationTime,id
IMG_0010.jpg,2024-03-01T00:00:00Z,late
img_0001.jpg,2024-01-01T15:00:00Z,same-as-local
IMG_0002.jpg,2024-01-03T03:00:00.999Z,subsecond
clip.mov,2024-02-01T00:00:00Z,video
old.png,2023-12-31T00:00:00Z,before-boundary
IMG_0003.jpeg,2024-01-01T15:00:00Z,on-boundary
IMG_0004.PNG,2024-01-01T14:59:59Z,one-second-early
IMG_0005.heic,2024-02-01T09:00:00+09:00,feb
";

fn paths_in(dir: &Path) -> PipelinePaths {
    PipelinePaths {
        shortcut_export: dir.join("01_iphone_export.txt"),
        local_inventory: dir.join("01x_iphone_photos.csv"),
        cloud_inventory: dir.join("02x_google_photos.csv"),
        output: dir.join("03x_photos_to_delete.csv"),
    }
}

fn setup(dir: &Path) -> PipelinePaths {
    let paths = paths_in(dir);
    std::fs::write(&paths.local_inventory, LOCAL_CSV).unwrap();
    std::fs::write(&paths.cloud_inventory, CLOUD_CSV).unwrap();
    paths
}

#[test]
fn test_diff_writes_sorted_candidates() {
    let dir = tempdir().expect("Failed to create temp dir");
    let paths = setup(dir.path());

    let result = pipeline::run_diff(&paths).expect("突合に失敗");

    let content = std::fs::read_to_string(&paths.output).unwrap();
    assert_eq!(
        content,
        "filename,creationTime,id
IMG_0003.jpeg,2024-01-01T15:00:00Z,on-boundary
IMG_0005.heic,2024-02-01T00:00:00Z,feb
IMG_0010.jpg,2024-03-01T00:00:00Z,late
"
    );

    assert_eq!(result.stats.cloud_records, 8);
    assert_eq!(result.stats.skipped_extension, 1);
    assert_eq!(result.stats.before_boundary, 2);
    assert_eq!(result.stats.matched_local, 2);
    assert_eq!(result.stats.candidates, 3);
}

#[test]
fn test_diff_output_is_byte_identical_across_runs() {
    let dir = tempdir().expect("Failed to create temp dir");
    let paths = setup(dir.path());

    pipeline::run_diff(&paths).unwrap();
    let first = std::fs::read(&paths.output).unwrap();
    pipeline::run_diff(&paths).unwrap();
    let second = std::fs::read(&paths.output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_diff_output_reads_back_as_cloud_inventory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let paths = setup(dir.path());

    let result = pipeline::run_diff(&paths).unwrap();
    let reloaded = inventory::read_cloud_inventory(&paths.output).unwrap();

    assert_eq!(reloaded, result.records);
}

#[test]
fn test_convert_then_diff() {
    let dir = tempdir().expect("Failed to create temp dir");
    let paths = paths_in(dir.path());

    std::fs::write(
        &paths.shortcut_export,
        "---filenames---\nIMG_0001.HEIC\nIMG_0002.HEIC\n---creationTimes---\n2024-01-01T09:00:00+09:00\n2024-01-02T09:00:00+09:00\n",
    )
    .unwrap();
    std::fs::write(
        &paths.cloud_inventory,
        "filename,creationTime,id\nIMG_0001.jpg,2024-01-01T00:00:00Z,kept\nIMG_0099.jpg,2024-01-05T00:00:00Z,candidate\n",
    )
    .unwrap();

    let converted = pipeline::run_convert(&paths).expect("変換に失敗");
    assert_eq!(converted, 2);

    let result = pipeline::run_diff(&paths).expect("突合に失敗");
    let ids: Vec<_> = result.records.iter().filter_map(|r| r.id.as_deref()).collect();
    assert_eq!(ids, vec!["candidate"]);
}
