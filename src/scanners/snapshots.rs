//! Website snapshot scanner.
//!
//! Walks an archive of website captures laid out as date-named folders:
//!
//! ```text
//! snapshot_root/
//! ├── html/
//! │   ├── 2017-05-15/index.html
//! │   └── 2017-06-02/index.html
//! └── images/
//!     └── 2017-05-15/banner.png
//! ```
//!
//! Two independent passes run over the root, concatenated (not interleaved)
//! in the output: the HTML pass first, then the image pass. Folders whose
//! name is not an exact `YYYY-MM-DD` date are silently skipped, whatever they
//! contain: a folder without a date cannot be placed on the timeline.

use futures::stream::{self, StreamExt};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument, warn};

use crate::dates::{resolve_folder_date, FolderDate};
use crate::extract::{self, NO_CONTENT};
use crate::models::{RecordDate, RecordKind, TimelineRecord};
use crate::scanners::sorted_dir_entries;

/// Scan a snapshot archive, producing one record per page and one per image.
///
/// The HTML pass emits a [`RecordKind::WebSnapshot`] for every date-named
/// folder under `root/html` that contains an `index.html`. The image pass
/// emits a [`RecordKind::ImageAsset`] for every file directly inside a
/// date-named folder under `root/images`. Missing `html` or `images`
/// directories contribute zero records.
///
/// Extraction failures are logged and the affected folder skipped; the scan
/// itself never fails.
#[instrument(level = "info", skip_all, fields(root = %root.display()))]
pub async fn scan(root: &Path) -> Vec<TimelineRecord> {
    let mut records = html_pass(&root.join("html")).await;
    records.extend(image_pass(&root.join("images")).await);
    info!(count = records.len(), "Scanned website snapshots");
    records
}

/// One [`RecordKind::WebSnapshot`] per dated folder holding an `index.html`.
async fn html_pass(html_root: &Path) -> Vec<TimelineRecord> {
    let records: Vec<TimelineRecord> = stream::iter(sorted_dir_entries(html_root).await)
        .then(|entry| async move {
            let folder_name = entry.file_name().to_string_lossy().into_owned();
            let FolderDate::Resolved(date) = resolve_folder_date(&folder_name) else {
                debug!(folder = %folder_name, "Folder name is not a date; skipping");
                return None;
            };

            let page_path = entry.path().join("index.html");
            if !fs::try_exists(&page_path).await.unwrap_or(false) {
                debug!(folder = %folder_name, "No index.html in snapshot folder; skipping");
                return None;
            }

            match extract::extract_preview(&page_path).await {
                Ok(page) => {
                    let content_snippet = if page.preview.is_empty() {
                        NO_CONTENT.to_string()
                    } else {
                        page.preview
                    };
                    Some(TimelineRecord {
                        date: RecordDate::Known(date),
                        kind: RecordKind::WebSnapshot,
                        source_id: folder_name,
                        content_snippet,
                        asset_path: page_path,
                    })
                }
                Err(e) => {
                    warn!(
                        path = %page_path.display(),
                        error = %e,
                        "Failed to extract snapshot preview; skipping folder"
                    );
                    None
                }
            }
        })
        .filter_map(std::future::ready)
        .collect()
        .await;

    info!(count = records.len(), "HTML pass complete");
    records
}

/// One [`RecordKind::ImageAsset`] per file directly inside a dated folder.
async fn image_pass(images_root: &Path) -> Vec<TimelineRecord> {
    let mut records = Vec::new();

    for folder in sorted_dir_entries(images_root).await {
        let folder_name = folder.file_name().to_string_lossy().into_owned();
        let FolderDate::Resolved(date) = resolve_folder_date(&folder_name) else {
            debug!(folder = %folder_name, "Folder name is not a date; skipping");
            continue;
        };

        for asset in sorted_dir_entries(&folder.path()).await {
            let is_file = asset
                .file_type()
                .await
                .map(|t| t.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }

            let asset_name = asset.file_name().to_string_lossy().into_owned();
            records.push(TimelineRecord {
                date: RecordDate::Known(date),
                kind: RecordKind::ImageAsset,
                source_id: folder_name.clone(),
                content_snippet: format!("Visual asset: {asset_name}"),
                asset_path: asset.path(),
            });
        }
    }

    info!(count = records.len(), "Image pass complete");
    records
}
