//! CSV persistence for the sorted timeline.
//!
//! Writes one UTF-8 CSV file with the fixed header
//! `date,type,source,content_snippet,asset_path` and one row per record, in
//! the order the timeline builder produced. Fields containing commas,
//! quotes, or newlines are quoted per RFC 4180 so the file round-trips
//! through any standard CSV reader (page previews regularly contain commas).
//!
//! This file is the contract with the downstream sentiment stage: a stable
//! column schema and a valid `YYYY-MM-DD` string in every `date` cell.

use itertools::Itertools;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

use crate::models::TimelineRecord;
use crate::timeline::PlacementPolicy;

/// Header row of the timeline CSV. Column order is part of the contract.
pub const CSV_HEADER: &str = "date,type,source,content_snippet,asset_path";

/// Persist the sorted timeline to `destination`.
///
/// Creates any missing parent directories first, then writes the whole file
/// in one shot. Undated records render the policy's placeholder date so the
/// `date` column always holds a valid date string.
///
/// # Errors
///
/// Returns an error if the destination directories cannot be created or the
/// file cannot be written. Both are fatal to the run: a timeline that cannot
/// be persisted is a timeline that does not exist.
#[instrument(level = "info", skip_all, fields(destination = %destination.display()))]
pub async fn write_timeline(
    records: &[TimelineRecord],
    destination: &Path,
    policy: &PlacementPolicy,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(path = %parent.display(), error = %e, "Failed to create destination directory");
            return Err(e.into());
        }
    }

    let mut out = String::with_capacity(records.len() * 128 + CSV_HEADER.len() + 1);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for record in records {
        let row = [
            policy.render_date(record.date).to_string(),
            record.kind.to_string(),
            record.source_id.clone(),
            record.content_snippet.clone(),
            record.asset_path.display().to_string(),
        ];
        out.push_str(&row.iter().map(|field| quote_field(field)).join(","));
        out.push('\n');
    }

    fs::write(destination, out).await?;
    info!(
        path = %destination.display(),
        count = records.len(),
        "Wrote timeline CSV"
    );
    Ok(())
}

/// Quote a CSV field per RFC 4180.
///
/// Fields without commas, quotes, or line breaks pass through verbatim;
/// everything else is wrapped in double quotes with inner quotes doubled.
fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecordDate, RecordKind};
    use crate::timeline::UndatedPlacement;
    use chrono::NaiveDate;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn policy() -> PlacementPolicy {
        PlacementPolicy {
            placement: UndatedPlacement::Placeholder,
            placeholder: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        }
    }

    fn record(snippet: &str) -> TimelineRecord {
        TimelineRecord {
            date: RecordDate::Known(NaiveDate::from_ymd_opt(2021, 3, 1).unwrap()),
            kind: RecordKind::WebSnapshot,
            source_id: "2021-03-01".to_string(),
            content_snippet: snippet.to_string(),
            asset_path: PathBuf::from("html/2021-03-01/index.html"),
        }
    }

    #[test]
    fn test_quote_field_passthrough_and_quoting() {
        assert_eq!(quote_field("plain"), "plain");
        assert_eq!(quote_field("a,b"), "\"a,b\"");
        assert_eq!(quote_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(quote_field("two\nlines"), "\"two\nlines\"");
    }

    #[tokio::test]
    async fn test_writes_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("timeline.csv");

        write_timeline(&[record("Status update today")], &dest, &policy())
            .await
            .unwrap();

        let contents = std::fs::read_to_string(&dest).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(
            lines.next(),
            Some("2021-03-01,Web Snapshot,2021-03-01,Status update today,html/2021-03-01/index.html")
        );
        assert_eq!(lines.next(), None);
    }

    #[tokio::test]
    async fn test_embedded_commas_are_quoted() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("timeline.csv");

        write_timeline(&[record("results, rankings, reactions")], &dest, &policy())
            .await
            .unwrap();

        let contents = std::fs::read_to_string(&dest).unwrap();
        assert!(contents.contains("\"results, rankings, reactions\""));
    }

    #[tokio::test]
    async fn test_undated_record_renders_placeholder_date() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("timeline.csv");
        let mut undated = record("Campus expansion");
        undated.date = RecordDate::Unknown;
        undated.kind = RecordKind::NewsArticle;

        write_timeline(&[undated], &dest, &policy()).await.unwrap();

        let contents = std::fs::read_to_string(&dest).unwrap();
        assert!(contents.contains("2025-01-01,News Article,"));
    }

    #[tokio::test]
    async fn test_creates_missing_destination_directories() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("deep").join("nested").join("timeline.csv");

        write_timeline(&[record("x")], &dest, &policy()).await.unwrap();
        assert!(dest.exists());
    }

    #[tokio::test]
    async fn test_rewrite_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("timeline.csv");
        let records = [record("first"), record("second, with comma")];

        write_timeline(&records, &dest, &policy()).await.unwrap();
        let first = std::fs::read(&dest).unwrap();
        write_timeline(&records, &dest, &policy()).await.unwrap();
        let second = std::fs::read(&dest).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_empty_timeline_still_writes_header() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("timeline.csv");

        write_timeline(&[], &dest, &policy()).await.unwrap();
        let contents = std::fs::read_to_string(&dest).unwrap();
        assert_eq!(contents, format!("{CSV_HEADER}\n"));
    }
}
