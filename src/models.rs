//! Data models for timeline records.
//!
//! This module defines the core data structures used throughout the application:
//! - [`TimelineRecord`]: One entry in the chronological timeline
//! - [`RecordKind`]: The closed set of record variants (web snapshot, image asset, news article)
//! - [`RecordDate`]: A resolved calendar date or an explicit "date unknown" marker
//!
//! Records are constructed by the scanners, merged and sorted by the timeline
//! builder, and serialized once to the output CSV. They are never mutated after
//! construction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

/// The variant of a [`TimelineRecord`].
///
/// This is a closed set: every record is exactly one of these, and the CSV
/// `type` column renders the human-readable labels below.
///
/// # Labels
///
/// | Variant | CSV label |
/// |---------|-----------|
/// | `WebSnapshot` | `Web Snapshot` |
/// | `ImageAsset` | `Image Asset` |
/// | `NewsArticle` | `News Article` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum RecordKind {
    /// An archived capture of a website page at a known date.
    #[serde(rename = "Web Snapshot")]
    WebSnapshot,
    /// A binary asset (usually an image) archived alongside a snapshot.
    #[serde(rename = "Image Asset")]
    ImageAsset,
    /// A news article with no reliable capture date.
    #[serde(rename = "News Article")]
    NewsArticle,
}

impl RecordKind {
    /// The human-readable label used in the output CSV `type` column.
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::WebSnapshot => "Web Snapshot",
            RecordKind::ImageAsset => "Image Asset",
            RecordKind::NewsArticle => "News Article",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The date attached to a timeline record.
///
/// Snapshot folders carry their capture date in the folder name, so snapshot
/// and image records always have a [`RecordDate::Known`] date. Article folders
/// carry no reliable date at all; those records are tagged
/// [`RecordDate::Unknown`] and a placement policy decides where they land in
/// the sorted timeline (see [`crate::timeline::PlacementPolicy`]).
///
/// Serializes as an ISO `YYYY-MM-DD` string for known dates and `null` for
/// unknown ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordDate {
    /// A genuine calendar date resolved from the source folder name.
    Known(NaiveDate),
    /// The true date of the underlying document is unknown.
    Unknown,
}

impl Serialize for RecordDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RecordDate::Known(date) => serializer.serialize_str(&date.to_string()),
            RecordDate::Unknown => serializer.serialize_none(),
        }
    }
}

/// One entry in the chronological timeline.
///
/// Every field is required: no partially-populated record is ever emitted.
/// The `content_snippet` is never empty: scanners substitute a fallback
/// label whenever extraction yields nothing.
///
/// # Fields
///
/// * `date` - Capture date, or [`RecordDate::Unknown`] for undated articles
/// * `kind` - Which variant this record is
/// * `source_id` - The folder or article name the record was derived from
///   (unique within one scanner, not globally)
/// * `content_snippet` - Text preview for snapshots, `Visual asset: {name}`
///   label for images, headline for articles
/// * `asset_path` - Location of the underlying document or image, preserved
///   verbatim so downstream consumers can re-open it
#[derive(Debug, Clone, Serialize)]
pub struct TimelineRecord {
    /// The record's place in the timeline.
    pub date: RecordDate,
    /// The record variant.
    pub kind: RecordKind,
    /// The originating folder or article identifier.
    pub source_id: String,
    /// Short human-readable text describing the record. Never empty.
    pub content_snippet: String,
    /// Filesystem location of the underlying document or image.
    pub asset_path: PathBuf,
}
