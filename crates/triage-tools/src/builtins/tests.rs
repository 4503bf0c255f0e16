use super::*;
use chrono::Utc;
use std::path::PathBuf;
use tempfile::tempdir;
use triage_core::{EmailAnalysisResult, SentimentLevel, UrgencyLevel};

fn analysis(source: &str) -> EmailAnalysisResult {
    EmailAnalysisResult {
        main_topic: "Delivery delay".to_string(),
        business_category: "Logistics".to_string(),
        contact_data: "jan@example.com".to_string(),
        urgency: UrgencyLevel::High,
        sentiment: SentimentLevel::Negative,
        summary: "Order has not arrived.".to_string(),
        event_date: Utc::now(),
        source_file: PathBuf::from(source),
    }
}

#[tokio::test]
async fn test_scan_inbox_creates_missing_directory() {
    let dir = tempdir().unwrap();
    let inbox = dir.path().join("inbox");

    let files = scan_inbox(&inbox).await.unwrap();

    assert!(files.is_empty());
    assert!(inbox.is_dir());
}

#[tokio::test]
async fn test_scan_inbox_lists_sorted_txt_files() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("b.txt"), "b").unwrap();
    std::fs::write(dir.path().join("a.txt"), "a").unwrap();
    std::fs::write(dir.path().join("notes.md"), "skip").unwrap();
    std::fs::create_dir(dir.path().join("nested.txt")).unwrap();

    let files = scan_inbox(dir.path()).await.unwrap();

    assert_eq!(
        files,
        vec![dir.path().join("a.txt"), dir.path().join("b.txt")]
    );
}

#[tokio::test]
async fn test_read_email_returns_content_and_name() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("offer.txt");
    std::fs::write(&path, "Zapytanie ofertowe 🙂").unwrap();

    let email = read_email(&path).await.unwrap();

    assert_eq!(email.content, "Zapytanie ofertowe 🙂");
    assert_eq!(email.file_name, "offer.txt");
}

#[tokio::test]
async fn test_read_email_missing_file() {
    let dir = tempdir().unwrap();
    let err = read_email(&dir.path().join("gone.txt")).await.unwrap_err();
    assert!(matches!(err, crate::Error::NotFound(_)));
}

#[tokio::test]
async fn test_report_appends_one_line_per_analysis() {
    let dir = tempdir().unwrap();
    let report = dir.path().join("out").join("report.jsonl");

    append_to_report(&report, &analysis("a.txt")).await.unwrap();
    let response = append_to_report(&report, &analysis("b.txt")).await.unwrap();
    assert!(response.success);

    let text = std::fs::read_to_string(&report).unwrap();
    let rows: Vec<EmailAnalysisResult> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].source_file, PathBuf::from("a.txt"));
    assert_eq!(rows[1].source_file, PathBuf::from("b.txt"));
    assert_eq!(rows[1].urgency, UrgencyLevel::High);
}

#[tokio::test]
async fn test_archive_moves_file() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("a.txt");
    let archive = dir.path().join("archive");
    std::fs::write(&source, "body").unwrap();

    let response = archive_email(&source, &archive).await.unwrap();

    assert!(response.success);
    assert!(!source.exists());
    assert_eq!(std::fs::read_to_string(archive.join("a.txt")).unwrap(), "body");
}

#[tokio::test]
async fn test_archive_collision_gets_timestamp_suffix() {
    let dir = tempdir().unwrap();
    let archive = dir.path().join("archive");
    std::fs::create_dir(&archive).unwrap();
    std::fs::write(archive.join("a.txt"), "older").unwrap();
    let source = dir.path().join("a.txt");
    std::fs::write(&source, "newer").unwrap();

    archive_email(&source, &archive).await.unwrap();

    assert_eq!(std::fs::read_to_string(archive.join("a.txt")).unwrap(), "older");
    let renamed: Vec<String> = std::fs::read_dir(&archive)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name != "a.txt")
        .collect();
    assert_eq!(renamed.len(), 1);
    // a_YYYYmmdd_HHMMSS.txt
    assert!(renamed[0].starts_with("a_"));
    assert!(renamed[0].ends_with(".txt"));
    assert_eq!(renamed[0].len(), "a_20240101_120000.txt".len());
}

#[tokio::test]
async fn test_archive_missing_source() {
    let dir = tempdir().unwrap();
    let err = archive_email(&dir.path().join("a.txt"), &dir.path().join("archive"))
        .await
        .unwrap_err();
    assert!(matches!(err, crate::Error::NotFound(_)));
}
