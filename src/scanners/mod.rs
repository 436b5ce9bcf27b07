//! Dataset scanners for building timeline records from local archives.
//!
//! This module contains submodules for scanning the two archive layouts.
//! Each scanner walks one root directory and produces timeline records:
//!
//! # Sources
//!
//! | Source | Module | Dated? | Notes |
//! |--------|--------|--------|-------|
//! | Website snapshots | [`snapshots`] | Yes | `html/` pages + `images/` assets, date-named folders |
//! | News articles | [`articles`] | No | Opaque folder names; records carry an unknown date |
//!
//! # Common Patterns
//!
//! Each scanner module exports one entry point:
//! - `scan(root)`: Walks the root directory, returns `Vec<TimelineRecord>`
//!
//! Scanners share these behaviors:
//! - Missing directories are treated as empty sources, never as errors
//! - Per-document extraction failures are logged and skipped
//! - Directory entries are processed in sorted-name order, so two runs over
//!   the same tree produce the same records in the same order

use itertools::Itertools;
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

pub mod articles;
pub mod snapshots;

/// List the entries of `dir` in sorted-name order.
///
/// A missing or unreadable directory is an empty source: the scan carries on
/// with zero entries rather than erroring out.
pub(crate) async fn sorted_dir_entries(dir: &Path) -> Vec<fs::DirEntry> {
    let mut read_dir = match fs::read_dir(dir).await {
        Ok(read_dir) => read_dir,
        Err(e) => {
            debug!(path = %dir.display(), error = %e, "Directory unavailable; treating as empty");
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    loop {
        match read_dir.next_entry().await {
            Ok(Some(entry)) => entries.push(entry),
            Ok(None) => break,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "Failed to read directory entry; stopping listing");
                break;
            }
        }
    }

    entries
        .into_iter()
        .sorted_by_key(|entry| entry.file_name())
        .collect()
}
