//! Command-line interface definitions for the timeline builder.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every path the pipeline touches is explicit configuration here; defaults
//! mirror the layout the dataset ships with.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use crate::timeline::UndatedPlacement;

/// Command-line arguments for the timeline builder.
///
/// The three path options cover everything the run reads and writes: the
/// snapshot dataset root, the article dataset root, and the destination CSV.
/// The placeholder options control where undated article records land in the
/// sorted timeline.
///
/// # Examples
///
/// ```sh
/// # Default dataset layout
/// archive_timeline
///
/// # Explicit roots and destination
/// archive_timeline -s ./dataset/website_crawls/dataset \
///     -a ./dataset/news_articles/dataset -o ./out/master_timeline.csv
///
/// # Pin undated articles to the end of the timeline
/// archive_timeline --undated-placement last
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Root of the website snapshot dataset (expects `html/` and `images/` inside)
    #[arg(short, long, default_value = "data/dataset/website_crawls/dataset")]
    pub snapshot_root: PathBuf,

    /// Root of the news article dataset (expects `html/` inside)
    #[arg(short, long, default_value = "data/dataset/news_articles/dataset")]
    pub article_root: PathBuf,

    /// Destination path for the timeline CSV
    #[arg(short, long, default_value = "output/master_timeline.csv")]
    pub output: PathBuf,

    /// Date written to the CSV for records whose true date is unknown
    #[arg(long, default_value = "2025-01-01")]
    pub placeholder_date: NaiveDate,

    /// Where undated article records sort within the timeline
    #[arg(long, value_enum, default_value_t = UndatedPlacement::Placeholder)]
    pub undated_placement: UndatedPlacement,
}
