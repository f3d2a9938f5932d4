//! End-to-end render tests: each chart produces a real, non-empty PNG.

use std::fs;

use cohort_visuals::charts::{
    RetentionChart, RevenueChart, SegmentShareChart, RETENTION_FILE_NAME,
};
use cohort_visuals::data::{COHORT_REVENUE, RETENTION, SEGMENTS};

const PNG_MAGIC: [u8; 4] = [137, 80, 78, 71];

#[test]
fn segment_pie_renders_to_png_bytes() {
    let bytes = SegmentShareChart::render_png_bytes(&SEGMENTS).expect("render should succeed");
    assert!(bytes.starts_with(&PNG_MAGIC), "should be PNG data");
}

#[test]
fn revenue_chart_renders_png_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cohort_revenue.png");

    RevenueChart::render(&COHORT_REVENUE, &path).expect("render should succeed");

    let meta = fs::metadata(&path).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn retention_save_creates_directory_and_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out_dir = dir.path().join("visuals");
    assert!(!out_dir.exists());

    let path = RetentionChart::save(&RETENTION, &out_dir).expect("save should succeed");

    assert_eq!(path, out_dir.join(RETENTION_FILE_NAME));
    let bytes = fs::read(&path).expect("output exists");
    assert!(!bytes.is_empty(), "png should be non-empty");
    assert!(bytes.starts_with(&PNG_MAGIC), "should be PNG data");
}

#[test]
fn retention_save_confirms_exactly_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut log = Vec::new();

    let path = RetentionChart::save_with_log(&RETENTION, dir.path(), &mut log)
        .expect("save should succeed");

    let text = String::from_utf8(log).expect("confirmation is utf-8");
    let confirmations: Vec<_> = text
        .lines()
        .filter(|line| line.contains("Chart saved successfully"))
        .collect();
    assert_eq!(confirmations.len(), 1, "exactly one confirmation line");
    assert_eq!(text.lines().count(), 1, "nothing else on the log");
    assert!(confirmations[0].ends_with(&path.display().to_string()));
}

#[test]
fn retention_save_overwrites_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let stale = dir.path().join(RETENTION_FILE_NAME);
    fs::write(&stale, b"stale").expect("seed stale file");

    let path = RetentionChart::save(&RETENTION, dir.path()).expect("save should succeed");

    let bytes = fs::read(path).expect("output exists");
    assert!(bytes.starts_with(&PNG_MAGIC), "stale content replaced");
}
