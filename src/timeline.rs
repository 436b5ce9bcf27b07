//! Timeline assembly: merge, order, and tie-break scanner output.
//!
//! The builder concatenates the snapshot and article record sets in that
//! order, then applies a stable ascending sort keyed solely on each record's
//! date. Stability is a documented guarantee, not an accident: records that
//! share a date keep their relative scan order (HTML pass, then image pass,
//! then article pass), and tests pin that behavior down.
//!
//! # Undated records
//!
//! Article records carry no real date. Where they land in the sorted
//! timeline is a policy decision ([`UndatedPlacement`]): historically they
//! were given a fixed placeholder date and sorted wherever that literal
//! value fell among the real dates. That behavior is preserved as the
//! default policy; `First` and `Last` pin the undated group to either end
//! of the timeline instead.

use chrono::NaiveDate;
use clap::ValueEnum;
use tracing::{info, instrument};

use crate::models::{RecordDate, TimelineRecord};

/// Where records with an unknown date land in the sorted timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UndatedPlacement {
    /// Sort undated records as if they were dated with the placeholder date,
    /// wherever that falls among the real dates. This reproduces the
    /// long-standing behavior of the pipeline.
    Placeholder,
    /// Undated records sort before every dated record.
    First,
    /// Undated records sort after every dated record.
    Last,
}

/// Sorting and rendering policy for undated records.
///
/// The `placeholder` date is always what the CSV `date` column shows for an
/// undated record, whatever the placement, so downstream consumers only ever
/// see valid date strings. Placement only controls the sort position.
#[derive(Debug, Clone, Copy)]
pub struct PlacementPolicy {
    /// Sort position of the undated group.
    pub placement: UndatedPlacement,
    /// Date rendered (and, under [`UndatedPlacement::Placeholder`], sorted
    /// on) for records whose true date is unknown.
    pub placeholder: NaiveDate,
}

impl PlacementPolicy {
    /// Sort key for a record date: a placement band plus a calendar date.
    ///
    /// Dated records always sit in the middle band, so `First`/`Last` move
    /// only the undated group while leaving real dates untouched.
    fn sort_key(&self, date: RecordDate) -> (u8, NaiveDate) {
        match date {
            RecordDate::Known(date) => (1, date),
            RecordDate::Unknown => match self.placement {
                UndatedPlacement::Placeholder => (1, self.placeholder),
                UndatedPlacement::First => (0, self.placeholder),
                UndatedPlacement::Last => (2, self.placeholder),
            },
        }
    }

    /// The calendar date written to the CSV for a record.
    pub fn render_date(&self, date: RecordDate) -> NaiveDate {
        match date {
            RecordDate::Known(date) => date,
            RecordDate::Unknown => self.placeholder,
        }
    }
}

/// Merge scanner output into one chronologically ordered timeline.
///
/// Concatenates `(snapshots, articles)` in that order, then stable-sorts
/// ascending by the policy's sort key. Records sharing a key keep their
/// relative input order.
#[instrument(level = "info", skip_all)]
pub fn build(
    snapshots: Vec<TimelineRecord>,
    articles: Vec<TimelineRecord>,
    policy: &PlacementPolicy,
) -> Vec<TimelineRecord> {
    let mut records: Vec<TimelineRecord> = snapshots.into_iter().chain(articles).collect();
    // Vec::sort_by_key is stable, which is exactly the tie-break we promise.
    records.sort_by_key(|record| policy.sort_key(record.date));
    info!(count = records.len(), "Timeline assembled");
    records
}
