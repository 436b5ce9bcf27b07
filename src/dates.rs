//! Folder-name date resolution.
//!
//! Snapshot folders are named for their capture date (`2017-05-15`). This
//! module turns a folder name into a calendar date, or an explicit
//! [`FolderDate::Unresolved`] when the name is anything else. Resolution is
//! a pure function: no I/O, no errors, same answer every time.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Exact `YYYY-MM-DD` shape. Anything longer, shorter, or differently
/// separated fails before chrono ever sees it.
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date shape regex is valid"));

/// The outcome of resolving a folder name.
///
/// `Unresolved` is a normal answer, not an error: folders that are not named
/// for a date (readme folders, partial downloads, stray files) are simply not
/// part of the dated timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderDate {
    /// The folder name is exactly a valid `YYYY-MM-DD` calendar date.
    Resolved(NaiveDate),
    /// The folder name is not a date.
    Unresolved,
}

/// Resolve a folder name against the fixed `YYYY-MM-DD` pattern.
///
/// Returns [`FolderDate::Resolved`] only on an exact match that is also a
/// real calendar date. Partial matches, extra characters, wrong separators,
/// non-numeric fields, and out-of-range months or days all resolve to
/// [`FolderDate::Unresolved`].
///
/// # Examples
///
/// ```
/// use archive_timeline::dates::{resolve_folder_date, FolderDate};
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2017, 5, 15).unwrap();
/// assert_eq!(resolve_folder_date("2017-05-15"), FolderDate::Resolved(expected));
/// assert_eq!(resolve_folder_date("2017-05-15-backup"), FolderDate::Unresolved);
/// assert_eq!(resolve_folder_date("notes"), FolderDate::Unresolved);
/// ```
pub fn resolve_folder_date(folder_name: &str) -> FolderDate {
    if !DATE_SHAPE.is_match(folder_name) {
        return FolderDate::Unresolved;
    }
    match NaiveDate::parse_from_str(folder_name, "%Y-%m-%d") {
        Ok(date) => FolderDate::Resolved(date),
        Err(_) => FolderDate::Unresolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(y: i32, m: u32, d: u32) -> FolderDate {
        FolderDate::Resolved(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_exact_dates_resolve() {
        assert_eq!(resolve_folder_date("2017-05-15"), resolved(2017, 5, 15));
        assert_eq!(resolve_folder_date("1999-12-31"), resolved(1999, 12, 31));
        assert_eq!(resolve_folder_date("2020-02-29"), resolved(2020, 2, 29));
    }

    #[test]
    fn test_empty_and_plain_names_are_unresolved() {
        assert_eq!(resolve_folder_date(""), FolderDate::Unresolved);
        assert_eq!(resolve_folder_date("notes"), FolderDate::Unresolved);
        assert_eq!(resolve_folder_date("index.html"), FolderDate::Unresolved);
    }

    #[test]
    fn test_extra_characters_are_unresolved() {
        assert_eq!(resolve_folder_date("2017-05-15-backup"), FolderDate::Unresolved);
        assert_eq!(resolve_folder_date("x2017-05-15"), FolderDate::Unresolved);
        assert_eq!(resolve_folder_date(" 2017-05-15"), FolderDate::Unresolved);
        assert_eq!(resolve_folder_date("2017-05-15 "), FolderDate::Unresolved);
    }

    #[test]
    fn test_wrong_separators_and_widths_are_unresolved() {
        assert_eq!(resolve_folder_date("2017/05/15"), FolderDate::Unresolved);
        assert_eq!(resolve_folder_date("2017_05_15"), FolderDate::Unresolved);
        assert_eq!(resolve_folder_date("17-05-15"), FolderDate::Unresolved);
        assert_eq!(resolve_folder_date("2017-5-15"), FolderDate::Unresolved);
        assert_eq!(resolve_folder_date("2017-05-5"), FolderDate::Unresolved);
    }

    #[test]
    fn test_non_numeric_fields_are_unresolved() {
        assert_eq!(resolve_folder_date("2017-ma-15"), FolderDate::Unresolved);
        assert_eq!(resolve_folder_date("year-05-15"), FolderDate::Unresolved);
    }

    #[test]
    fn test_out_of_range_dates_are_unresolved() {
        assert_eq!(resolve_folder_date("2017-13-01"), FolderDate::Unresolved);
        assert_eq!(resolve_folder_date("2017-00-01"), FolderDate::Unresolved);
        assert_eq!(resolve_folder_date("2017-02-30"), FolderDate::Unresolved);
        assert_eq!(resolve_folder_date("2019-02-29"), FolderDate::Unresolved);
        assert_eq!(resolve_folder_date("2017-01-00"), FolderDate::Unresolved);
    }
}
