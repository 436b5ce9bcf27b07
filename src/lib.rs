//! # Archive Timeline
//!
//! A batch pipeline that turns a locally materialized archive of dated
//! website snapshots and loosely-dated news articles into one chronologically
//! ordered timeline, persisted as a CSV file ready for sentiment charting.
//!
//! ## Features
//!
//! - Resolves capture dates from `YYYY-MM-DD` folder names, skipping anything
//!   that is not an exact date
//! - Extracts page titles, bounded text previews, and article headlines from
//!   archived HTML documents, isolating failures to one document at a time
//! - Emits one record per snapshot page, per image asset, and per article
//! - Merges both record streams with a stable date sort and a configurable
//!   placement policy for undated articles
//! - Writes a single `date,type,source,content_snippet,asset_path` CSV
//!
//! ## Usage
//!
//! ```sh
//! archive_timeline -s ./website_crawls/dataset -a ./news_articles/dataset \
//!     -o ./output/master_timeline.csv
//! ```
//!
//! ## Architecture
//!
//! The pipeline runs in three stages:
//! 1. **Scanning**: Walk the snapshot and article roots, producing records
//! 2. **Assembly**: Concatenate and stable-sort the records by date
//! 3. **Output**: Persist the sorted timeline as a CSV file
//!
//! The sentiment scoring and chart rendering stage is a separate consumer of
//! the CSV; this crate's obligation to it is a stable column schema and a
//! valid date string in every row.

pub mod cli;
pub mod dates;
pub mod extract;
pub mod models;
pub mod outputs;
pub mod scanners;
pub mod timeline;
pub mod utils;

// ---- Re-exports for stable public API ----
pub use crate::models::{RecordDate, RecordKind, TimelineRecord};
pub use crate::timeline::{build, PlacementPolicy, UndatedPlacement};
