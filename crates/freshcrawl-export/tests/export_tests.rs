use std::fs;

use chrono::{DateTime, TimeZone, Utc};
use freshcrawl_core::{CrawlError, DiscoveredEntry, EntryType, RecencyWindow};
use freshcrawl_export::CsvExporter;
use tempfile::TempDir;

const ORIGIN: &str = "https://contoso.sharepoint.com";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap()
}

fn window() -> RecencyWindow {
    RecencyWindow::new(now(), 14)
}

fn entries() -> Vec<DiscoveredEntry> {
    vec![
        DiscoveredEntry::new(
            "/sites/axion/Shared Documents/zeta.txt",
            EntryType::New,
            Utc.with_ymd_and_hms(2024, 3, 7, 0, 0, 0).unwrap(),
        ),
        DiscoveredEntry::new(
            "/sites/axion/Shared Documents/Reports/alpha report.xlsx",
            EntryType::Modified,
            Utc.with_ymd_and_hms(2024, 3, 8, 12, 30, 0).unwrap(),
        ),
        DiscoveredEntry::new(
            "/sites/axion/Shared Documents/Reports/Q1",
            EntryType::NewFolder,
            Utc.with_ymd_and_hms(2024, 3, 9, 8, 0, 0).unwrap(),
        ),
    ]
}

#[test]
fn test_export_writes_rows_in_discovery_order() {
    let dir = TempDir::new().unwrap();
    let exported = CsvExporter::new(ORIGIN)
        .with_output_dir(dir.path())
        .export(&entries(), "Axion", &window())
        .unwrap();

    assert_eq!(exported.rows, 3);
    assert_eq!(
        exported.path,
        dir.path().join("axion_modified_files_2024-02-25_to_2024-03-10.csv")
    );

    let content = fs::read_to_string(&exported.path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        [
            "url,name,entry_type,timestamp",
            "https://contoso.sharepoint.com/sites/axion/Shared%20Documents,zeta.txt,new,2024-03-07T00:00:00Z",
            "https://contoso.sharepoint.com/sites/axion/Shared%20Documents/Reports,alpha report.xlsx,modified,2024-03-08T12:30:00Z",
            "https://contoso.sharepoint.com/sites/axion/Shared%20Documents/Reports,Q1,new_folder,2024-03-09T08:00:00Z",
        ]
    );
}

#[test]
fn test_empty_export_is_header_only() {
    let dir = TempDir::new().unwrap();
    let exported = CsvExporter::new(ORIGIN)
        .with_output_dir(dir.path())
        .export(&[], "Axion", &window())
        .unwrap();

    assert_eq!(exported.rows, 0);
    let content = fs::read_to_string(&exported.path).unwrap();
    assert_eq!(content, "url,name,entry_type,timestamp\n");
}

#[test]
fn test_export_creates_missing_output_dir() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("reports").join("march");
    let exported = CsvExporter::new(ORIGIN)
        .with_output_dir(&nested)
        .export(&entries()[..1], "Axion", &window())
        .unwrap();

    assert!(exported.path.starts_with(&nested));
    assert!(exported.path.exists());
}

#[test]
fn test_export_reports_unwritable_target() {
    let dir = TempDir::new().unwrap();
    // A plain file where the output directory should be.
    let blocker = dir.path().join("blocked");
    fs::write(&blocker, "x").unwrap();

    let result = CsvExporter::new(ORIGIN)
        .with_output_dir(&blocker)
        .export(&entries(), "Axion", &window());
    assert!(matches!(result, Err(CrawlError::Io { .. })));
}

#[test]
fn test_names_with_commas_are_quoted() {
    let entry = DiscoveredEntry::new(
        "/sites/axion/Shared Documents/budget, final.xlsx",
        EntryType::New,
        now(),
    );
    let mut buffer = Vec::new();
    CsvExporter::new(ORIGIN)
        .write_records(&mut buffer, &[entry])
        .unwrap();

    let content = String::from_utf8(buffer).unwrap();
    assert!(content.contains("\"budget, final.xlsx\""));
}
