//! Binary entry point: scan both archives, assemble the timeline, persist it.
//!
//! Failure policy (most of it lives further down the stack): unparseable
//! folder names and missing directories are non-events, and unreadable
//! documents are logged and skipped. Only structural problems abort the run
//! with a non-zero exit: a dataset that was never extracted, or a
//! destination that cannot be written.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

use archive_timeline::cli::Cli;
use archive_timeline::timeline::{self, PlacementPolicy};
use archive_timeline::utils::ensure_writable_dir;
use archive_timeline::{outputs, scanners};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("timeline_build starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.snapshot_root, ?args.article_root, ?args.output, "Parsed CLI arguments");

    // Early check: a dataset that was never extracted should fail here, with
    // a message naming the paths, not deep inside a scan.
    if !args.snapshot_root.exists() && !args.article_root.exists() {
        error!(
            snapshot_root = %args.snapshot_root.display(),
            article_root = %args.article_root.display(),
            "Neither dataset root exists; extract the dataset archive first or pass -s/-a"
        );
        return Err(format!(
            "neither dataset root exists: {} / {}",
            args.snapshot_root.display(),
            args.article_root.display()
        )
        .into());
    }

    // Early check: ensure the destination directory is writable
    let destination_dir = match args.output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::path::PathBuf::from("."),
    };
    if let Err(e) = ensure_writable_dir(&destination_dir).await {
        error!(
            path = %destination_dir.display(),
            error = %e,
            "Destination directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Scan both archives ----
    info!(root = %args.snapshot_root.display(), "Scanning website history");
    let snapshot_records = scanners::snapshots::scan(&args.snapshot_root).await;

    info!(root = %args.article_root.display(), "Scanning news articles");
    let article_records = scanners::articles::scan(&args.article_root).await;

    // ---- Assemble and persist ----
    let policy = PlacementPolicy {
        placement: args.undated_placement,
        placeholder: args.placeholder_date,
    };
    let records = timeline::build(snapshot_records, article_records, &policy);

    if let Err(e) = outputs::csv::write_timeline(&records, &args.output, &policy).await {
        error!(path = %args.output.display(), error = %e, "Failed to persist timeline");
        return Err(e);
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        count = records.len(),
        path = %args.output.display(),
        "Generated timeline"
    );

    Ok(())
}
