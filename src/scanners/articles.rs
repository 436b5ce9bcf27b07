//! News article scanner.
//!
//! Walks an archive of saved news articles:
//!
//! ```text
//! article_root/
//! └── html/
//!     ├── campus-expansion/index.html
//!     └── ranking-row/index.html
//! ```
//!
//! Article folder names are opaque identifiers, not dates; there is no
//! reliable date information anywhere in this layout. Every record is
//! therefore tagged [`RecordDate::Unknown`] and the timeline builder's
//! placement policy decides where the group lands in the sorted output.

use futures::stream::{self, StreamExt};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument, warn};

use crate::extract;
use crate::models::{RecordDate, RecordKind, TimelineRecord};
use crate::scanners::sorted_dir_entries;

/// Scan an article archive, producing one record per article.
///
/// For every folder under `root/html` containing an `index.html`, emits a
/// [`RecordKind::NewsArticle`] whose snippet is the article headline (first
/// `<h1>`), falling back to the folder name when the page has no heading.
/// A missing root contributes zero records; per-article extraction failures
/// are logged and skipped.
#[instrument(level = "info", skip_all, fields(root = %root.display()))]
pub async fn scan(root: &Path) -> Vec<TimelineRecord> {
    let records: Vec<TimelineRecord> = stream::iter(sorted_dir_entries(&root.join("html")).await)
        .then(|entry| async move {
            let folder_name = entry.file_name().to_string_lossy().into_owned();

            let page_path = entry.path().join("index.html");
            if !fs::try_exists(&page_path).await.unwrap_or(false) {
                debug!(folder = %folder_name, "No index.html in article folder; skipping");
                return None;
            }

            match extract::extract_headline(&page_path, &folder_name).await {
                Ok(headline) => {
                    let content_snippet = if headline.is_empty() {
                        folder_name.clone()
                    } else {
                        headline
                    };
                    Some(TimelineRecord {
                        date: RecordDate::Unknown,
                        kind: RecordKind::NewsArticle,
                        source_id: folder_name,
                        content_snippet,
                        asset_path: page_path,
                    })
                }
                Err(e) => {
                    warn!(
                        path = %page_path.display(),
                        error = %e,
                        "Failed to extract article headline; skipping article"
                    );
                    None
                }
            }
        })
        .filter_map(std::future::ready)
        .collect()
        .await;

    info!(count = records.len(), "Scanned news articles");
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;
    use tempfile::TempDir;

    fn write_article(root: &Path, folder: &str, html: &str) {
        let dir = root.join("html").join(folder);
        stdfs::create_dir_all(&dir).unwrap();
        stdfs::write(dir.join("index.html"), html).unwrap();
    }

    #[tokio::test]
    async fn test_scan_emits_headline_records() {
        let root = TempDir::new().unwrap();
        write_article(
            root.path(),
            "campus-expansion",
            "<html><body><h1>Campus Expansion Announced</h1><p>detail</p></body></html>",
        );

        let records = scan(root.path()).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, RecordKind::NewsArticle);
        assert_eq!(records[0].date, RecordDate::Unknown);
        assert_eq!(records[0].source_id, "campus-expansion");
        assert_eq!(records[0].content_snippet, "Campus Expansion Announced");
    }

    #[tokio::test]
    async fn test_headline_falls_back_to_folder_name() {
        let root = TempDir::new().unwrap();
        write_article(
            root.path(),
            "ranking-row",
            "<html><body><p>no heading here</p></body></html>",
        );

        let records = scan(root.path()).await;
        assert_eq!(records[0].content_snippet, "ranking-row");
    }

    #[tokio::test]
    async fn test_folder_without_index_is_skipped() {
        let root = TempDir::new().unwrap();
        stdfs::create_dir_all(root.path().join("html").join("empty-folder")).unwrap();
        write_article(root.path(), "real-article", "<html><body><h1>Real</h1></body></html>");

        let records = scan(root.path()).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source_id, "real-article");
    }

    #[tokio::test]
    async fn test_unreadable_article_skips_that_article() {
        let root = TempDir::new().unwrap();
        let bad = root.path().join("html").join("corrupted");
        stdfs::create_dir_all(&bad).unwrap();
        stdfs::write(bad.join("index.html"), [0xff, 0xfe, 0xfd]).unwrap();
        write_article(root.path(), "survivor", "<html><body><h1>Survivor</h1></body></html>");

        let records = scan(root.path()).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].content_snippet, "Survivor");
    }

    #[tokio::test]
    async fn test_missing_root_yields_no_records() {
        let root = TempDir::new().unwrap();
        assert!(scan(&root.path().join("never-extracted")).await.is_empty());
    }

    #[tokio::test]
    async fn test_date_named_article_folders_stay_undated() {
        // Article folder names are opaque even when they happen to look like dates.
        let root = TempDir::new().unwrap();
        write_article(
            root.path(),
            "2021-03-01",
            "<html><body><h1>Dated-looking article</h1></body></html>",
        );

        let records = scan(root.path()).await;
        assert_eq!(records[0].date, RecordDate::Unknown);
    }
}
